use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabgrade_core::{
    config_hash, CellResult, FormatError, FormatErrorKind, GradeError, Row, SchemaVersion,
    TableConfig,
};

use crate::aggregate::{grade_with_rejections, Grading};
use crate::validate::{validate_row, RowValidation};

/// Schema version of [`GradeReport`] payloads.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// What happened to the table in an assessment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Informational table; neither validated nor graded.
    Material,
    /// Every cell was blank in an allow-blank table; not graded.
    Blank,
    /// The table was graded.
    Graded(Grading),
}

/// Validation and grading results for one submission of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Accepted submissions keyed by cell name.
    pub normalized: BTreeMap<String, String>,
    /// Rejected submissions keyed by cell name.
    pub format_errors: BTreeMap<String, FormatError>,
    /// Grading outcome.
    pub outcome: Outcome,
}

impl Assessment {
    /// Returns the grading, if the table was graded.
    pub fn grading(&self) -> Option<&Grading> {
        match &self.outcome {
            Outcome::Graded(grading) => Some(grading),
            _ => None,
        }
    }
}

/// Serializable record of an assessment with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Report schema version.
    pub schema_version: SchemaVersion,
    /// Table name.
    pub table: String,
    /// SHA-256 of the canonical resolved configuration.
    pub config_hash: String,
    /// The assessment itself.
    pub assessment: Assessment,
}

impl GradeReport {
    /// Wraps an assessment produced under `config`.
    pub fn new(assessment: Assessment, config: &TableConfig) -> Result<Self, GradeError> {
        Ok(Self {
            schema_version: REPORT_SCHEMA,
            table: config.name.clone(),
            config_hash: config_hash(config)?,
            assessment,
        })
    }
}

/// Validates and grades one submission against the reference answers.
///
/// Cells rejected as invalid or of the wrong length score zero; cells with
/// no stored value score as missing. Row count comes from `correct`.
pub fn assess(
    correct: &[String],
    submissions: &BTreeMap<String, String>,
    config: &TableConfig,
) -> Assessment {
    let mut assessment = Assessment {
        normalized: BTreeMap::new(),
        format_errors: BTreeMap::new(),
        outcome: Outcome::Material,
    };
    if config.is_material {
        return assessment;
    }

    let keys: Vec<String> = (0..correct.len()).map(|row| config.cell_key(row)).collect();
    let raw: Vec<Option<String>> = keys.iter().map(|key| submissions.get(key).cloned()).collect();
    let cells = match validate_row(&raw, config) {
        RowValidation::Blank => {
            log::warn!("{}: blank submission accepted, grading skipped", config.name);
            assessment.outcome = Outcome::Blank;
            return assessment;
        }
        RowValidation::Cells(cells) => cells,
    };

    let mut rejected = vec![false; cells.len()];
    let mut rows = Vec::with_capacity(cells.len());
    for (row, (cell, key)) in cells.into_iter().zip(&keys).enumerate() {
        let submitted = match cell {
            CellResult::Normalized(value) => {
                assessment.normalized.insert(key.clone(), value.clone());
                Some(value)
            }
            CellResult::FormatError(err) => {
                let stored = match err.kind {
                    FormatErrorKind::MissingSubmission | FormatErrorKind::Blank => None,
                    FormatErrorKind::InvalidLiteral | FormatErrorKind::FixedWidthMismatch => {
                        rejected[row] = true;
                        raw[row].clone()
                    }
                };
                assessment.format_errors.insert(key.clone(), err);
                stored
            }
        };
        rows.push(Row {
            index_label: row.to_string(),
            correct: Some(correct[row].clone()),
            submitted,
        });
    }

    assessment.outcome = Outcome::Graded(grade_with_rejections(&rows, config, |row| rejected[row]));
    assessment
}
