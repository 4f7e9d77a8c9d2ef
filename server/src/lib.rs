//! Marquee document store.
//!
//! A small development stand-in for a remote JSON document store. It keeps
//! keyed collections in memory and serves them with the same protocol the
//! Marquee client speaks:
//!
//! - `GET /<collection>.json` returns `{<key>: <document>, ...}` or `null`
//! - `POST /<collection>.json` stores the body and returns `{"name": <key>}`

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::DocumentStore;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

impl AppState {
    /// State backed by a fresh, empty store.
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new_shared(),
        }
    }
}

/// Build the router with tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
