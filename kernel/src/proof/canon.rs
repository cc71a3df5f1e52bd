//! Canonical JSON bytes for hashing.
//!
//! Rules: object keys sorted by byte order, compact separators, integers
//! only. Floats are rejected so digests never depend on float formatting.

use serde_json::{Map, Value};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    #[error("canonical JSON encoding failed: {detail}")]
    Encode { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an
/// `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let sorted = canonicalize(value)?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}

fn canonicalize(value: &Value) -> Result<Value, CanonError> {
    match value {
        Value::Number(n) if n.is_f64() => Err(CanonError::NonIntegerNumber {
            raw: n.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .map(canonicalize)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = Map::with_capacity(map.len());
            for key in keys {
                out.insert(key.clone(), canonicalize(&map[key])?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}
