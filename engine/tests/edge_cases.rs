//! Edge case tests for marquee-engine
//!
//! These tests cover boundary conditions and unusual store responses.

use marquee_engine::{wire, Content, Error, MovieRecord, SyncState, FETCH_FAILED};
use serde_json::json;

fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn empty_string_fields() {
    let records = wire::decode_collection(&body(json!({
        "m1": {"title": "", "openingText": "", "releaseDate": ""}
    })))
    .unwrap();

    assert_eq!(records, vec![MovieRecord::new("m1", "", "", "")]);
}

#[test]
fn unicode_strings() {
    let titles = vec![
        "日本語テスト",      // Japanese
        "Привет мир",        // Russian
        "مرحبا بالعالم",     // Arabic
        "🎉🚀💯",            // Emoji
        "Ω≈ç√∫",             // Math symbols
        "Hello\nWorld\tTab", // Whitespace
        "Null\0Test",        // Embedded null
    ];

    for (i, title) in titles.iter().enumerate() {
        let key = format!("movie_{}", i);
        let records = wire::decode_collection(&body(json!({
            key.clone(): {"title": title, "openingText": "x", "releaseDate": "2020"}
        })))
        .unwrap();

        assert_eq!(records.len(), 1, "Failed for: {}", title);
        assert_eq!(records[0].id, key);
        assert_eq!(records[0].title, *title);
    }
}

#[test]
fn unicode_keys() {
    let records = wire::decode_collection(&body(json!({
        "映画": {"title": "A"}
    })))
    .unwrap();

    assert_eq!(records[0].id, "映画");
}

#[test]
fn very_long_strings() {
    // 1MB string
    let long_string = "x".repeat(1024 * 1024);

    let records = wire::decode_collection(&body(json!({
        "m1": {"title": "A", "openingText": long_string}
    })))
    .unwrap();

    assert_eq!(records[0].opening_text.len(), 1024 * 1024);
}

// ============================================================================
// Numeric Edge Cases
// ============================================================================

#[test]
fn integer_boundaries() {
    let values = vec![i64::MIN, i64::MAX, 0i64, -1i64, 1i64];

    for value in values {
        let records = wire::decode_collection(&body(json!({
            "m1": {"title": "A", "releaseDate": value}
        })))
        .unwrap();

        assert_eq!(records[0].release_date, value.to_string());
    }
}

#[test]
fn float_fields() {
    let records = wire::decode_collection(&body(json!({
        "m1": {"title": 2.5}
    })))
    .unwrap();

    assert_eq!(records[0].title, "2.5");
}

// ============================================================================
// Body Shape Edge Cases
// ============================================================================

#[test]
fn body_with_surrounding_whitespace() {
    let records = wire::decode_collection(b"\n  {\"m1\": {\"title\": \"A\"}}  \n").unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn truncated_body() {
    let err = wire::decode_collection(b"{\"m1\": {\"title\": \"A\"").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn array_of_only_holes() {
    let records = wire::decode_collection(b"[null, null]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn boolean_body() {
    let err = wire::decode_collection(b"true").unwrap_err();
    assert_eq!(
        err,
        Error::Parse("expected an object of records, got a boolean".into())
    );
}

#[test]
fn one_bad_entry_fails_the_whole_read() {
    let err = wire::decode_collection(&body(json!({
        "m1": {"title": "A"},
        "m2": [1, 2, 3],
    })))
    .unwrap_err();

    assert_eq!(
        err,
        Error::Parse("record m2: expected an object, got an array".into())
    );
}

#[test]
fn many_records() {
    let mut map = serde_json::Map::new();
    for i in 0..10_000 {
        map.insert(format!("m{:05}", i), json!({"title": format!("Movie {}", i)}));
    }

    let records = wire::decode_collection(&body(serde_json::Value::Object(map))).unwrap();

    assert_eq!(records.len(), 10_000);
    assert_eq!(records[0].id, "m00000");
    assert_eq!(records[9_999].id, "m09999");
}

// ============================================================================
// State Edge Cases
// ============================================================================

#[test]
fn example_scenario() {
    let mut state = SyncState::new();

    state.begin_refresh();
    state.complete_refresh(wire::decode_collection(&body(json!({
        "m1": {"title": "A", "openingText": "x", "releaseDate": "2020-01-01"}
    }))));

    assert_eq!(
        state.records,
        vec![MovieRecord::new("m1", "A", "x", "2020-01-01")]
    );
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(state.content().to_string(), "A\n2020-01-01\nx");

    state.begin_refresh();
    state.complete_refresh(Err(Error::HttpStatus(500)));

    assert_eq!(state.content(), Content::Error(FETCH_FAILED));
    assert_eq!(state.records.len(), 1);
}

#[test]
fn parse_failure_collapses_into_error_string() {
    let mut state = SyncState::new();

    state.begin_refresh();
    state.complete_refresh(wire::decode_collection(b"not json"));

    let message = state.error.clone().unwrap();
    assert!(message.starts_with("invalid response body:"), "{}", message);
    assert_eq!(state.content(), Content::Error(&message));
}

#[test]
fn repeated_identical_refreshes_converge() {
    let payload = body(json!({
        "m1": {"title": "A"},
        "m2": {"title": "B"},
    }));

    let mut first = SyncState::new();
    first.begin_refresh();
    first.complete_refresh(wire::decode_collection(&payload));

    let mut second = first.clone();
    second.begin_refresh();
    second.complete_refresh(wire::decode_collection(&payload));

    assert_eq!(first, second);
}

#[test]
fn recovery_after_failure() {
    let mut state = SyncState::new();

    state.begin_refresh();
    state.complete_refresh(Err(Error::Transport("connection refused".into())));
    assert_eq!(state.content(), Content::Error("connection refused"));

    state.begin_refresh();
    state.complete_refresh(Ok(Vec::new()));
    assert_eq!(state.content(), Content::Empty);
}
