//! Canonical JSON helpers for reports and hashes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ErrorInfo, GradeError};

/// Serializes `value` to compact JSON with object keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GradeError> {
    // Round-tripping through `Value` sorts map keys (serde_json's default map is a BTreeMap).
    let value = serde_json::to_value(value)
        .map_err(|err| GradeError::Serde(ErrorInfo::new("json-serialize", err.to_string())))?;
    serde_json::to_vec(&value)
        .map_err(|err| GradeError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Decodes a JSON payload.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GradeError> {
    serde_json::from_slice(bytes)
        .map_err(|err| GradeError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
}
