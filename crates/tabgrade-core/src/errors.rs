//! Structured error types shared across tabgrade crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic carried by every [`GradeError`].
///
/// `code` is dotted and stable (`codec.invalid_digit`, `index.width`); the
/// message is the text a question author sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Dotted error code.
    pub code: String,
    /// Author-facing message.
    pub message: String,
    /// Offending table, literal, attribute and similar details.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to fix the table description, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key = value`; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a fix-it hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the tabgrade engine.
///
/// Literal and width failures for a single submitted cell are normally
/// folded into a [`crate::CellResult::FormatError`] by the validator; the
/// variants here surface when the same failure hits reference answers or
/// configuration, where it is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GradeError {
    /// A literal does not parse in the configured base.
    #[error("invalid literal: {0}")]
    InvalidLiteral(ErrorInfo),
    /// A digit count disagrees with the configured fixed width.
    #[error("fixed width mismatch: {0}")]
    FixedWidthMismatch(ErrorInfo),
    /// No submission exists for a cell.
    #[error("missing submission: {0}")]
    MissingSubmission(ErrorInfo),
    /// The reference answer list is absent for a table.
    #[error("missing reference answer: {0}")]
    MissingReferenceAnswer(ErrorInfo),
    /// Configuration values contradict each other or are out of range.
    #[error("configuration conflict: {0}")]
    ConfigurationConflict(ErrorInfo),
    /// An index start value does not parse in the index base.
    #[error("invalid start value: {0}")]
    InvalidStartValue(ErrorInfo),
    /// Serialization and file decoding errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        write!(f, " [{}]", self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " {{{}}}", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl GradeError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GradeError::InvalidLiteral(info)
            | GradeError::FixedWidthMismatch(info)
            | GradeError::MissingSubmission(info)
            | GradeError::MissingReferenceAnswer(info)
            | GradeError::ConfigurationConflict(info)
            | GradeError::InvalidStartValue(info)
            | GradeError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`GradeError::ConfigurationConflict`] without context.
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        GradeError::ConfigurationConflict(ErrorInfo::new(code, message))
    }
}
