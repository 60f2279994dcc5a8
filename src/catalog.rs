//! Loading record snapshots exported from the storefront API

use std::path::Path;

use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// `{"data": [...], ...}` page envelope; other keys are ignored.
#[derive(Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
struct Envelope<R> {
    #[serde(default)]
    data: Option<Vec<R>>,
}

/// Accepted snapshot shapes: a bare array, a `{"data": [...]}` page
/// envelope, or `null`. A `null` collection (or envelope without `data`)
/// becomes an empty one, so listings render empty instead of failing.
pub fn parse_records<R: DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    let rows = match serde_json::from_str::<Value>(json)? {
        Value::Null => Vec::new(),
        rows @ Value::Array(_) => serde_json::from_value(rows)?,
        envelope @ Value::Object(_) => serde_json::from_value::<Envelope<R>>(envelope)?.data.unwrap_or_default(),
        other => return Err(serde_json::Error::custom(format!("expected an array or a data envelope, got {other}")).into()),
    };
    Ok(rows)
}

pub fn load_records<R: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<R>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let records = parse_records(&json)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded snapshot");
    Ok(records)
}
