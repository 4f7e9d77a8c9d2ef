//! # Marquee Engine
//!
//! The pure core of the Marquee movie client.
//!
//! This crate holds everything about the movie collection that does not
//! touch the network: the record model, the translation between the remote
//! document-store wire shape and that model, the synchronization state a
//! view renders from, and the policy that decides what the view shows.
//!
//! ## Design Principles
//!
//! - **No IO**: transport lives in `marquee-client`; this crate only sees bytes
//! - **Shape coercion, not validation**: any JSON scalar is accepted as a field
//! - **Pure resolution**: what to display is a function of [`SyncState`] alone
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! The store keeps movies as a JSON object keyed by store-assigned IDs. The
//! engine flattens that into a [`CollectionView`], a list of [`MovieRecord`]
//! values that carry their key as [`MovieRecord::id`].
//!
//! ### Sync State
//!
//! [`SyncState`] is the `{records, is_loading, error}` triple. A refresh
//! moves it through [`SyncState::begin_refresh`] and
//! [`SyncState::complete_refresh`]; failures collapse into the `error` string
//! while the last good records stay in place.
//!
//! ### Content Resolution
//!
//! [`SyncState::content`] resolves the triple to a single [`Content`] with a
//! fixed precedence: loading, then error, then records, then empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use marquee_engine::{wire, Content, SyncState};
//!
//! let body = br#"{"m1": {"title": "A", "openingText": "x", "releaseDate": "2020-01-01"}}"#;
//!
//! let mut state = SyncState::new();
//! state.begin_refresh();
//! assert_eq!(state.content(), Content::Loading);
//!
//! state.complete_refresh(wire::decode_collection(body));
//! assert!(!state.is_loading);
//! assert_eq!(state.records[0].id, "m1");
//! assert_eq!(state.records[0].title, "A");
//! ```

pub mod content;
pub mod error;
pub mod record;
pub mod state;
pub mod wire;

// Re-export main types at crate root
pub use content::{Content, EMPTY_NOTICE, LOADING_NOTICE};
pub use error::{Error, FETCH_FAILED};
pub use record::{MovieRecord, NewMovie};
pub use state::SyncState;
pub use wire::CreatedKey;

/// Store-assigned key of a record.
pub type RecordId = String;

/// Ordered list of records as enumerated from the remote collection.
pub type CollectionView = Vec<MovieRecord>;
