//! Translation between the document-store wire shape and the record model.
//!
//! The store answers a collection read with one JSON object keyed by
//! store-assigned IDs:
//!
//! ```json
//! {"-Nx1": {"title": "A", "openingText": "x", "releaseDate": "2020-01-01"}}
//! ```
//!
//! An empty collection comes back as `null` or as no body at all. Stores of
//! this family also answer with a JSON array when every key happens to be a
//! small integer; array slots are keyed by their index and `null` holes are
//! skipped.

use crate::{error::Result, CollectionView, Error, MovieRecord, NewMovie, RecordId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body returned by the store after an append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedKey {
    /// The key the store assigned to the new record
    pub name: RecordId,
}

/// Field set of one stored movie as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMovie {
    #[serde(default, deserialize_with = "scalar_text")]
    title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    opening_text: String,
    #[serde(default, deserialize_with = "scalar_text")]
    release_date: String,
}

impl WireMovie {
    fn into_record(self, id: RecordId) -> MovieRecord {
        NewMovie::new(self.title, self.opening_text, self.release_date).with_id(id)
    }
}

/// Accept any JSON scalar as text. `null` reads as the empty string.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn decode_entry(id: RecordId, value: Value) -> Result<MovieRecord> {
    if !value.is_object() {
        return Err(Error::Parse(format!(
            "record {id}: expected an object, got {}",
            kind(&value)
        )));
    }

    let movie: WireMovie =
        serde_json::from_value(value).map_err(|e| Error::Parse(format!("record {id}: {e}")))?;
    Ok(movie.into_record(id))
}

/// Decode a collection read into records.
///
/// Records come out in the order the decoded map enumerates its keys, which
/// for this decoder is ascending key order.
pub fn decode_collection(body: &[u8]) -> Result<CollectionView> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(id, value)| decode_entry(id, value))
            .collect(),
        Value::Array(slots) => slots
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| decode_entry(index.to_string(), value))
            .collect(),
        other => Err(Error::Parse(format!(
            "expected an object of records, got {}",
            kind(&other)
        ))),
    }
}

/// Encode an append payload.
pub fn encode_new_movie(movie: &NewMovie) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(movie)?)
}

/// Read the key out of the store's answer to an append.
///
/// The answer is informational only: the record is stored once the store
/// accepted the request, so any body that is not `{"name": <key>}` yields
/// `None` rather than an error.
pub fn decode_created(body: &[u8]) -> Option<CreatedKey> {
    serde_json::from_slice(body).ok()
}
