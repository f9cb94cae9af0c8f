#![deny(missing_docs)]
#![doc = "Configuration, value types and errors shared by the tabgrade answer-table grading engine."]

pub mod config;
pub mod errors;
pub mod json;
pub mod provenance;
mod types;

pub use config::{cell_key, Base, IndexSpec, PrefixTable, TableConfig, TableSpec};
pub use errors::{ErrorInfo, GradeError};
pub use json::{from_json_slice, to_canonical_json_bytes};
pub use provenance::{config_hash, SchemaVersion};
pub use types::{
    CellResult, CellScore, FormatError, FormatErrorKind, Row, TableScore, FEEDBACK_CORRECT,
    FEEDBACK_INCORRECT, FEEDBACK_MISSING,
};
