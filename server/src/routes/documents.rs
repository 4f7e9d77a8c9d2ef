//! Collection endpoints.
//!
//! A collection is addressed as `/<name>.json`. Reading it returns every
//! document keyed by ID, or `null` when there are none; posting to it stores
//! the body under a new key.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::store::Documents;
use crate::AppState;

/// Response for a stored document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Key assigned to the new document
    pub name: String,
}

/// Create collection routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{document}", get(list_handler).post(push_handler))
}

/// Strip the `.json` suffix off a path segment.
fn collection_name(document: &str) -> Result<&str> {
    match document.strip_suffix(".json") {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(AppError::NotFound(format!("/{document}"))),
    }
}

/// GET /{collection}.json - Read a whole collection.
async fn list_handler(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> Result<Json<Option<Documents>>> {
    let collection = collection_name(&document)?;
    let docs = state.store.list(collection);

    tracing::debug!(
        collection = %collection,
        count = docs.as_ref().map_or(0, |d| d.len()),
        "Collection read"
    );

    Ok(Json(docs))
}

/// POST /{collection}.json - Store a document under a new key.
async fn push_handler(
    State(state): State<AppState>,
    Path(document): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<CreatedResponse>> {
    let collection = collection_name(&document)?;
    if body.is_null() {
        return Err(AppError::BadRequest("cannot store a null document".into()));
    }

    let name = state.store.push(collection, body);
    tracing::info!(collection = %collection, key = %name, "Document created");

    Ok(Json(CreatedResponse { name }))
}
