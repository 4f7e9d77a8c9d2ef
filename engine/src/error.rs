//! Error types for the Marquee engine.

use thiserror::Error;

/// Message shown for any non-success status from the store.
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// All the ways a store round trip can fail.
///
/// The `Display` text of each variant is what ends up in
/// [`SyncState::error`](crate::SyncState::error), so it is written for a
/// person reading the view, not for a log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No status was obtained: connect refused, DNS failure, reset.
    #[error("{0}")]
    Transport(String),

    /// The store answered with a non-success status. The code is kept for
    /// logs; the message is fixed.
    #[error("Failed to fetch data")]
    HttpStatus(u16),

    /// The body was not JSON or not the expected shape.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl Error {
    /// Status code carried by an [`Error::HttpStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::HttpStatus(500);
        assert_eq!(err.to_string(), FETCH_FAILED);

        let err = Error::HttpStatus(404);
        assert_eq!(err.to_string(), "Failed to fetch data");

        let err = Error::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");

        let err = Error::Parse("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "invalid response body: expected value at line 1 column 1"
        );
    }

    #[test]
    fn status_only_for_http_failures() {
        assert_eq!(Error::HttpStatus(503).status(), Some(503));
        assert_eq!(Error::Transport("reset".into()).status(), None);
        assert_eq!(Error::Parse("eof".into()).status(), None);
    }

    #[test]
    fn from_serde_json() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
