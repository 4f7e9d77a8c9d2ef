//! Remote store client.
//!
//! [`MovieStore`] is the seam between the controller and the network.
//! [`HttpStore`] speaks the document-store protocol:
//!
//! - `GET <endpoint>` reads the whole collection
//! - `POST <endpoint>` with a JSON body appends one record and answers
//!   `{"name": <new key>}`
//!
//! No caching, no retries and no timeout: a request that never resolves
//! keeps its caller waiting.

use std::future::Future;
use std::sync::Arc;

use marquee_engine::{wire, CollectionView, CreatedKey, Error, NewMovie};
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;

/// Result type for store calls.
pub type Result<T> = std::result::Result<T, Error>;

/// A remote collection of movies.
pub trait MovieStore: Send + Sync + 'static {
    /// Read every record in the collection.
    fn list_all(&self) -> impl Future<Output = Result<CollectionView>> + Send;

    /// Append one record. The store picks the key; an answer that does not
    /// carry it yields `None`. Only transport failures and non-success
    /// statuses are errors.
    fn append(&self, movie: &NewMovie) -> impl Future<Output = Result<Option<CreatedKey>>> + Send;
}

impl<S: MovieStore> MovieStore for Arc<S> {
    fn list_all(&self) -> impl Future<Output = Result<CollectionView>> + Send {
        (**self).list_all()
    }

    fn append(&self, movie: &NewMovie) -> impl Future<Output = Result<Option<CreatedKey>>> + Send {
        (**self).append(movie)
    }
}

/// [`MovieStore`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStore {
    /// Create a store client for the configured collection.
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a store client sharing an existing connection pool.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: config.collection_url(),
        }
    }

    /// The collection endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

impl MovieStore for HttpStore {
    async fn list_all(&self) -> Result<CollectionView> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Collection read rejected"
            );
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport)?;
        let records = wire::decode_collection(&body)?;

        tracing::debug!(endpoint = %self.endpoint, count = records.len(), "Collection read");
        Ok(records)
    }

    async fn append(&self, movie: &NewMovie) -> Result<Option<CreatedKey>> {
        let body = wire::encode_new_movie(movie)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Append rejected"
            );
            return Err(Error::HttpStatus(status.as_u16()));
        }

        // The store has accepted the record; a body we cannot read is only
        // worth a log line.
        let created = match response.bytes().await {
            Ok(body) => {
                let created = wire::decode_created(&body);
                if created.is_none() && !body.is_empty() {
                    tracing::debug!(
                        endpoint = %self.endpoint,
                        body = %String::from_utf8_lossy(&body),
                        "Append answer has no key"
                    );
                }
                created
            }
            Err(e) => {
                tracing::debug!(endpoint = %self.endpoint, error = %e, "Append answer unreadable");
                None
            }
        };

        tracing::debug!(endpoint = %self.endpoint, created = ?created, "Record appended");
        Ok(created)
    }
}
