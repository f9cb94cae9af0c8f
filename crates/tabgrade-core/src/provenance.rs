//! Schema and provenance descriptors attached to grading reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::TableConfig;
use crate::errors::GradeError;
use crate::json::to_canonical_json_bytes;

/// Version stamped on serialized grade reports.
///
/// Readers accept any report whose major version matches their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when fields are removed or change meaning.
    pub major: u32,
    /// Bumped when fields are added.
    pub minor: u32,
    /// Bumped for fixes that keep the layout.
    pub patch: u32,
}

impl SchemaVersion {
    /// `major.minor.patch`.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether a report stamped `other` can be read by code built for `self`.
    pub fn reads(&self, other: &SchemaVersion) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// SHA-256 of the canonical JSON encoding of a resolved configuration.
pub fn config_hash(config: &TableConfig) -> Result<String, GradeError> {
    let bytes = to_canonical_json_bytes(config)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
