use serde::{Deserialize, Serialize};

/// Feedback attached to a correct cell.
pub const FEEDBACK_CORRECT: &str = "Correct.";
/// Feedback attached to an incorrect cell.
pub const FEEDBACK_INCORRECT: &str = "Incorrect.";
/// Feedback attached to a cell with no submission.
pub const FEEDBACK_MISSING: &str = "Missing input.";

/// One table row as seen by the grading aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Label shown in the index column.
    pub index_label: String,
    /// Reference literal, `None` when the reference list ran out.
    pub correct: Option<String>,
    /// Raw submitted string, `None` when no key was submitted.
    pub submitted: Option<String>,
}

/// Classifies why a submitted cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatErrorKind {
    /// No key was submitted for the cell.
    MissingSubmission,
    /// An empty string was submitted where blanks are not the sentinel.
    Blank,
    /// The literal does not parse in the configured base.
    InvalidLiteral,
    /// The digit count disagrees with the fixed width.
    FixedWidthMismatch,
}

/// Rejection reason for a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatError {
    /// Machine readable classification.
    pub kind: FormatErrorKind,
    /// Message shown next to the cell.
    pub message: String,
}

impl FormatError {
    /// Creates a new format error.
    pub fn new(kind: FormatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of validating one submitted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum CellResult {
    /// The cleaned submission to store for grading.
    Normalized(String),
    /// The submission was rejected.
    FormatError(FormatError),
}

impl CellResult {
    /// Returns the normalized value, if any.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            CellResult::Normalized(value) => Some(value),
            CellResult::FormatError(_) => None,
        }
    }

    /// Returns the format error, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            CellResult::Normalized(_) => None,
            CellResult::FormatError(err) => Some(err),
        }
    }

    /// Whether the cell passed validation.
    pub fn is_ok(&self) -> bool {
        matches!(self, CellResult::Normalized(_))
    }
}

/// Score of a single cell; cells never carry external weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellScore {
    /// 1 for a correct cell, 0 otherwise.
    pub score: u8,
    /// Feedback string.
    pub feedback: String,
    /// Always 0.
    pub weight: u32,
}

impl CellScore {
    /// Score for a matching cell.
    pub fn correct() -> Self {
        Self::with(1, FEEDBACK_CORRECT)
    }

    /// Score for a mismatching cell.
    pub fn incorrect() -> Self {
        Self::with(0, FEEDBACK_INCORRECT)
    }

    /// Score for a cell with no submission.
    pub fn missing() -> Self {
        Self::with(0, FEEDBACK_MISSING)
    }

    fn with(score: u8, feedback: &str) -> Self {
        Self {
            score,
            feedback: feedback.to_string(),
            weight: 0,
        }
    }

    /// Whether the cell earned credit.
    pub fn is_correct(&self) -> bool {
        self.score >= 1
    }
}

/// Table-level score in `[0, 1]` together with its external weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableScore {
    /// Fraction of credit earned.
    pub score: f64,
    /// External weighting multiplier.
    pub weight: u32,
}

impl TableScore {
    /// Score rounded to an integer percentage.
    pub fn percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// Every cell earned credit.
    pub fn all_correct(&self) -> bool {
        self.percent() == 100
    }

    /// No credit was earned.
    pub fn all_incorrect(&self) -> bool {
        self.percent() == 0
    }
}
