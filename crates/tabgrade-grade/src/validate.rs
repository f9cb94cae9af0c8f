use serde::{Deserialize, Serialize};
use tabgrade_codec::{parse_literal, Literal};
use tabgrade_core::{Base, CellResult, FormatError, FormatErrorKind, TableConfig};

/// Message for a cell with no submitted key.
pub const NO_SUBMITTED_ANSWER: &str = "No submitted answer.";
/// Message for an empty cell when blank is not the sentinel.
pub const LEFT_BLANK: &str = "Invalid format. The submitted answer was left blank.";
/// Message for a cell whose digit count misses the fixed width.
pub const WRONG_LENGTH: &str = "Invalid format. The submitted answer is not the right length.";

/// Validation outcome for a whole answer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "cells", rename_all = "snake_case")]
pub enum RowValidation {
    /// Every cell was blank and blank tables are allowed; nothing to grade.
    Blank,
    /// One result per cell, in row order.
    Cells(Vec<CellResult>),
}

impl RowValidation {
    /// Iterates over the format errors with their row numbers.
    pub fn format_errors(&self) -> impl Iterator<Item = (usize, &FormatError)> {
        let cells: &[CellResult] = match self {
            RowValidation::Blank => &[],
            RowValidation::Cells(cells) => cells,
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(row, cell)| cell.format_error().map(|err| (row, err)))
    }
}

/// Wording for the unknown alternative in format messages.
fn unknown_alternative(config: &TableConfig) -> String {
    if config.unknown_value.is_empty() {
        "blank".to_string()
    } else {
        format!("'{}'", config.unknown_value)
    }
}

fn invalid_literal_message(config: &TableConfig) -> String {
    let alternative = unknown_alternative(config);
    match config.base {
        Base::Decimal => {
            format!("Invalid format. The submitted answer must be a valid decimal or {alternative}.")
        }
        base => format!(
            "Invalid format. The submitted answer must be a valid {} number or {alternative}.",
            base.describe()
        ),
    }
}

/// Validates one submitted cell.
///
/// Width is only checked here when `strict_grading` is off; strict tables
/// accept any length and enforce it in the comparator instead.
pub fn validate_cell(raw: Option<&str>, config: &TableConfig) -> CellResult {
    let Some(raw) = raw else {
        return CellResult::FormatError(FormatError::new(
            FormatErrorKind::MissingSubmission,
            NO_SUBMITTED_ANSWER,
        ));
    };
    if raw.is_empty() && !config.unknown_value.is_empty() {
        return CellResult::FormatError(FormatError::new(FormatErrorKind::Blank, LEFT_BLANK));
    }
    let numeral = match parse_literal(raw, config) {
        Ok(Literal::Text(_)) | Ok(Literal::Unknown(_)) => {
            return CellResult::Normalized(raw.to_string())
        }
        Ok(Literal::Numeral(numeral)) => numeral,
        Err(err) => {
            log::debug!("{}: rejected '{raw}': {}", config.name, err.info().message);
            return CellResult::FormatError(FormatError::new(
                FormatErrorKind::InvalidLiteral,
                invalid_literal_message(config),
            ));
        }
    };
    if config.fixed_width > 0 && !config.strict_grading && numeral.digit_len() != config.fixed_width
    {
        return CellResult::FormatError(FormatError::new(
            FormatErrorKind::FixedWidthMismatch,
            WRONG_LENGTH,
        ));
    }
    CellResult::Normalized(raw.to_string())
}

/// Validates an answer column.
///
/// With `allow_blank`, a column whose cells are all absent or empty is
/// reported as [`RowValidation::Blank`] and produces no format errors.
pub fn validate_row(raw: &[Option<String>], config: &TableConfig) -> RowValidation {
    if config.allow_blank && raw.iter().all(|cell| cell.as_deref().map_or(true, str::is_empty)) {
        log::debug!("{}: all {} cells blank", config.name, raw.len());
        return RowValidation::Blank;
    }
    RowValidation::Cells(
        raw.iter()
            .map(|cell| validate_cell(cell.as_deref(), config))
            .collect(),
    )
}
