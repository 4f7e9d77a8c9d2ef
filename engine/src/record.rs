//! Record types for movies.

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A movie as submitted by the presentation layer, before the store has
/// assigned it a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl NewMovie {
    /// Create a new movie payload.
    pub fn new(
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            opening_text: opening_text.into(),
            release_date: release_date.into(),
        }
    }

    /// Attach a store-assigned key.
    pub fn with_id(self, id: impl Into<RecordId>) -> MovieRecord {
        MovieRecord {
            id: id.into(),
            title: self.title,
            opening_text: self.opening_text,
            release_date: self.release_date,
        }
    }
}

/// A movie held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Store-assigned key, unique and immutable once assigned
    pub id: RecordId,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

impl MovieRecord {
    /// Create a record from its parts.
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        opening_text: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        NewMovie::new(title, opening_text, release_date).with_id(id)
    }
}
