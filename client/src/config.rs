//! Configuration management for the client.

use std::env;

/// Store used when `MARQUEE_STORE_URL` is not set.
pub const DEFAULT_STORE_URL: &str = "https://react-http-45506-default-rtdb.firebaseio.com";

/// Collection used when `MARQUEE_COLLECTION` is not set.
pub const DEFAULT_COLLECTION: &str = "movies";

/// Where the remote document store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the store, without a trailing slash
    pub store_url: String,
    /// Collection name; the endpoint is `<store_url>/<collection>.json`
    pub collection: String,
}

impl Config {
    /// Build and validate a configuration.
    pub fn new(store_url: &str, collection: &str) -> Result<Self, ConfigError> {
        let parsed = reqwest::Url::parse(store_url)
            .map_err(|e| ConfigError::InvalidStoreUrl(format!("{store_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidStoreUrl(format!(
                "{store_url}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidStoreUrl(format!(
                "{store_url}: query and fragment are not allowed"
            )));
        }

        if !is_collection_name(collection) {
            return Err(ConfigError::InvalidCollection(collection.to_string()));
        }

        Ok(Self {
            store_url: store_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_url =
            env::var("MARQUEE_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let collection =
            env::var("MARQUEE_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        Self::new(&store_url, &collection)
    }

    /// Load a `.env` file if one exists, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// The collection endpoint both reads and appends go to.
    pub fn collection_url(&self) -> String {
        format!("{}/{}.json", self.store_url, self.collection)
    }
}

/// Collection names end up verbatim in the endpoint path.
fn is_collection_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid MARQUEE_STORE_URL: {0}")]
    InvalidStoreUrl(String),

    #[error("Invalid MARQUEE_COLLECTION value: '{0}'")]
    InvalidCollection(String),
}
