//! Synchronization state - what a view renders from.
//!
//! `SyncState` only changes through the two refresh transitions below. The
//! controller that owns it decides when they fire; the state itself has no
//! notion of concurrent refreshes and simply applies whatever completes.

use crate::{error::Result, CollectionView, Content};
use serde::{Deserialize, Serialize};

/// The `{records, is_loading, error}` triple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    /// Records from the last successful refresh
    pub records: CollectionView,
    /// Whether a refresh is in flight
    pub is_loading: bool,
    /// Message of the last failed refresh, cleared when a new one starts
    pub error: Option<String>,
}

impl SyncState {
    /// Initial state: no records, not loading, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// A refresh has started. Prior records stay until replaced.
    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// A refresh has resolved.
    ///
    /// On failure the records of the previous successful refresh are kept;
    /// they are hidden by [`SyncState::content`] while `error` is set.
    pub fn complete_refresh(&mut self, outcome: Result<CollectionView>) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Resolve what should be displayed for this state.
    pub fn content(&self) -> Content<'_> {
        Content::resolve(self)
    }
}
