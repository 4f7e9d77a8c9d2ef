//! # Marquee Client
//!
//! Keeps a local view of a remote movie collection in step with the store.
//!
//! - [`HttpStore`] talks to a document-store endpoint over HTTP and turns
//!   its keyed JSON object into an ordered list of records.
//! - [`SyncController`] owns the `{records, is_loading, error}` state, runs
//!   refreshes against any [`MovieStore`], and forwards new records.
//!
//! ```no_run
//! use marquee_client::{Config, HttpStore, SyncController};
//! use marquee_engine::NewMovie;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let controller = SyncController::new(HttpStore::new(&config));
//!
//! controller.activate().await;
//! println!("{}", controller.content_text());
//!
//! controller
//!     .submit_record(NewMovie::new("Alien", "In space...", "1979-05-25"))
//!     .await?;
//! controller.refresh().await;
//! # Ok(())
//! # }
//! ```
//!
//! This crate only emits `tracing` events; installing a subscriber is up to
//! the application.

pub mod config;
pub mod controller;
pub mod store;

pub use config::{Config, ConfigError};
pub use controller::SyncController;
pub use store::{HttpStore, MovieStore};
