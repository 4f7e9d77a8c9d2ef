//! Content resolution - what a view shows for a given state.

use crate::{MovieRecord, SyncState};
use std::fmt;

/// Text shown while a refresh is in flight.
pub const LOADING_NOTICE: &str = "Data is loading...";

/// Text shown when the collection is empty.
pub const EMPTY_NOTICE: &str = "Found no movies";

/// The single thing a view displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// A refresh is in flight; records and error are ignored
    Loading,
    /// The last refresh failed; records are ignored
    Error(&'a str),
    /// The non-empty record list
    Records(&'a [MovieRecord]),
    /// Nothing loaded, nothing failed
    Empty,
}

impl<'a> Content<'a> {
    /// Apply the display precedence: loading, error, records, empty.
    pub fn resolve(state: &'a SyncState) -> Self {
        if state.is_loading {
            Content::Loading
        } else if let Some(error) = state.error.as_deref() {
            Content::Error(error)
        } else if !state.records.is_empty() {
            Content::Records(&state.records)
        } else {
            Content::Empty
        }
    }
}

/// Plain-text rendering, one record per block.
impl fmt::Display for Content<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Loading => f.write_str(LOADING_NOTICE),
            Content::Error(message) => f.write_str(message),
            Content::Empty => f.write_str(EMPTY_NOTICE),
            Content::Records(records) => {
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(
                        f,
                        "{}\n{}\n{}",
                        record.title, record.release_date, record.opening_text
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FETCH_FAILED;

    fn state(records: usize, is_loading: bool, error: Option<&str>) -> SyncState {
        SyncState {
            records: (0..records)
                .map(|i| {
                    MovieRecord::new(format!("m{i}"), format!("Movie {i}"), "x", "2020-01-01")
                })
                .collect(),
            is_loading,
            error: error.map(String::from),
        }
    }

    #[test]
    fn loading_overrides_everything() {
        assert_eq!(state(0, true, None).content(), Content::Loading);
        assert_eq!(state(3, true, None).content(), Content::Loading);
        assert_eq!(state(0, true, Some(FETCH_FAILED)).content(), Content::Loading);
        assert_eq!(state(3, true, Some(FETCH_FAILED)).content(), Content::Loading);
    }

    #[test]
    fn error_overrides_records() {
        assert_eq!(
            state(3, false, Some(FETCH_FAILED)).content(),
            Content::Error(FETCH_FAILED)
        );
        assert_eq!(
            state(0, false, Some(FETCH_FAILED)).content(),
            Content::Error(FETCH_FAILED)
        );
    }

    #[test]
    fn records_override_empty() {
        let s = state(2, false, None);
        match s.content() {
            Content::Records(records) => assert_eq!(records.len(), 2),
            other => panic!("Expected records, got {other:?}"),
        }
    }

    #[test]
    fn empty_notice() {
        assert_eq!(state(0, false, None).content(), Content::Empty);
    }

    #[test]
    fn render_notices() {
        assert_eq!(Content::Loading.to_string(), "Data is loading...");
        assert_eq!(Content::Empty.to_string(), "Found no movies");
        assert_eq!(Content::Error(FETCH_FAILED).to_string(), FETCH_FAILED);
    }

    #[test]
    fn render_records() {
        let records = vec![
            MovieRecord::new("m1", "A", "first crawl", "2020-01-01"),
            MovieRecord::new("m2", "B", "second crawl", "2021-02-02"),
        ];

        assert_eq!(
            Content::Records(&records).to_string(),
            "A\n2020-01-01\nfirst crawl\n\nB\n2021-02-02\nsecond crawl"
        );
    }
}
