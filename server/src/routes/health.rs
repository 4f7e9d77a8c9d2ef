//! Liveness and inventory.
//!
//! `/health` reports how many documents each collection holds, which is
//! enough to check from a shell that a client's appends landed.

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Inventory {
    pub status: &'static str,
    /// Documents across all collections
    pub documents: usize,
    /// Document count per non-empty collection
    pub collections: BTreeMap<String, usize>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(inventory))
        .route("/", get(banner))
}

async fn inventory(State(state): State<AppState>) -> Json<Inventory> {
    let collections = state.store.counts();
    Json(Inventory {
        status: "ok",
        documents: collections.values().sum(),
        collections,
    })
}

async fn banner(State(state): State<AppState>) -> String {
    format!(
        "Marquee document store {}: {} documents",
        env!("CARGO_PKG_VERSION"),
        state.store.counts().values().sum::<usize>()
    )
}
