//! Synchronization controller.
//!
//! Owns the [`SyncState`] a view renders from and drives it through the
//! fetch lifecycle. The state lives in a `tokio::sync::watch` channel: the
//! controller is the only writer, views either take snapshots with
//! [`SyncController::state`] or follow changes through
//! [`SyncController::subscribe`].
//!
//! Refreshes are not serialized. Two overlapping refreshes both run to
//! completion and whichever resolves last is what the state shows, even if
//! it was started first.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use marquee_engine::{CreatedKey, NewMovie, SyncState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::store::{MovieStore, Result};

struct Inner<S> {
    store: S,
    state: watch::Sender<SyncState>,
    activated: AtomicBool,
    /// Sequence number handed to the next refresh
    next_refresh: AtomicU64,
    /// Highest sequence number whose outcome has been applied
    newest_applied: AtomicU64,
}

/// Mediates between a [`MovieStore`] and the presentation layer.
///
/// Cheap to clone; clones share the same state.
pub struct SyncController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for SyncController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MovieStore> SyncController<S> {
    /// Create a controller in the initial state. Nothing is fetched until
    /// [`activate`](Self::activate) or [`refresh`](Self::refresh).
    pub fn new(store: S) -> Self {
        let (state, _) = watch::channel(SyncState::new());
        Self {
            inner: Arc::new(Inner {
                store,
                state,
                activated: AtomicBool::new(false),
                next_refresh: AtomicU64::new(0),
                newest_applied: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SyncState {
        self.inner.state.borrow().clone()
    }

    /// Follow state changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.inner.state.subscribe()
    }

    /// Text for the current state under the display precedence.
    pub fn content_text(&self) -> String {
        self.inner.state.borrow().content().to_string()
    }

    /// Whether [`activate`](Self::activate) has run.
    pub fn is_activated(&self) -> bool {
        self.inner.activated.load(Ordering::SeqCst)
    }

    /// One-shot startup hook.
    ///
    /// The first call refreshes and returns `true`. Every later call, from
    /// any clone, does nothing and returns `false`.
    pub async fn activate(&self) -> bool {
        if self.inner.activated.swap(true, Ordering::SeqCst) {
            tracing::debug!("Controller already activated");
            return false;
        }

        tracing::info!("Controller activated");
        self.refresh().await;
        true
    }

    /// Fetch the whole collection and apply the outcome.
    ///
    /// Failures of any kind end up in [`SyncState::error`]; records from the
    /// last successful refresh stay in place.
    pub async fn refresh(&self) {
        let seq = self.inner.next_refresh.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(SyncState::begin_refresh);
        tracing::debug!(refresh = seq, "Refresh started");

        let outcome = self.inner.store.list_all().await;
        match &outcome {
            Ok(records) => {
                tracing::debug!(refresh = seq, count = records.len(), "Refresh succeeded")
            }
            Err(e) => {
                tracing::warn!(refresh = seq, error = %e, status = ?e.status(), "Refresh failed")
            }
        }

        let newest = self.inner.newest_applied.fetch_max(seq, Ordering::SeqCst);
        if newest > seq {
            tracing::warn!(
                refresh = seq,
                newer = newest,
                "Stale refresh resolved after a newer one"
            );
        }

        self.inner
            .state
            .send_modify(|state| state.complete_refresh(outcome));
    }

    /// Run [`refresh`](Self::refresh) on the runtime without waiting for it.
    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.refresh().await })
    }

    /// Forward a new record to the store.
    ///
    /// The local records are not touched and no refresh follows, so the new
    /// record shows up only after the next refresh. A failed append is
    /// returned to the caller and leaves [`SyncState::error`] alone.
    pub async fn submit_record(&self, movie: NewMovie) -> Result<Option<CreatedKey>> {
        match self.inner.store.append(&movie).await {
            Ok(created) => {
                tracing::info!(
                    title = %movie.title,
                    key = ?created.as_ref().map(|c| c.name.as_str()),
                    "Record submitted"
                );
                Ok(created)
            }
            Err(e) => {
                tracing::warn!(title = %movie.title, error = %e, "Record submission failed");
                Err(e)
            }
        }
    }
}
