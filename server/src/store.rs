//! In-memory document store.
//!
//! Each collection is a map from generated key to an arbitrary JSON
//! document. Keys are kept sorted so a collection always reads back in the
//! same order.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Documents of one collection, keyed by store-assigned ID.
pub type Documents = BTreeMap<String, Value>;

/// Thread-safe collection store, shared across handlers via `Arc`.
#[derive(Debug, Default)]
pub struct DocumentStore {
    collections: DashMap<String, Documents>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Create an empty store wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// All documents of a collection, or `None` when it holds nothing.
    pub fn list(&self, collection: &str) -> Option<Documents> {
        self.collections
            .get(collection)
            .filter(|docs| !docs.is_empty())
            .map(|docs| docs.value().clone())
    }

    /// Store a document under a fresh key and return the key.
    pub fn push(&self, collection: &str, document: Value) -> String {
        let key = format!("-{}", uuid::Uuid::new_v4().simple());

        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), document);

        tracing::debug!(collection = %collection, key = %key, "Document stored");

        key
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    /// Whether a collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Document count of every non-empty collection, by name.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.collections
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| (entry.key().clone(), entry.value().len()))
            .collect()
    }
}
