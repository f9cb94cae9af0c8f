use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabgrade_core::{ErrorInfo, GradeError, Row, TableConfig, TableSpec};

use crate::index::expand_indices;

/// Everything the host needs to draw one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Key under which the row's input is submitted.
    pub cell_name: String,
    /// Label shown in the index column.
    pub index_label: String,
    /// Reference literal, trimmed.
    pub correct: String,
    /// Prefilled input value; empty when none was configured.
    pub prefill: String,
    /// Placeholder hint, if any.
    pub placeholder: Option<String>,
}

impl RowLayout {
    /// Value shown in the input: the raw submission, else the prefill.
    pub fn shown_value<'a>(&'a self, submissions: &'a BTreeMap<String, String>) -> &'a str {
        submissions
            .get(&self.cell_name)
            .map(String::as_str)
            .unwrap_or(self.prefill.as_str())
    }

    /// The grading view of this row.
    pub fn to_row(&self, submissions: &BTreeMap<String, String>) -> Row {
        Row {
            index_label: self.index_label.clone(),
            correct: Some(self.correct.clone()),
            submitted: submissions.get(&self.cell_name).cloned(),
        }
    }
}

/// Repeats a one-element per-row list `num_rows` times.
///
/// An absent or empty list yields `None`; a list of any length other than
/// 1 or `num_rows` is a configuration conflict naming `what`.
pub fn broadcast(
    list: Option<&[String]>,
    num_rows: usize,
    what: &str,
) -> Result<Option<Vec<String>>, GradeError> {
    let Some(list) = list.filter(|list| !list.is_empty()) else {
        return Ok(None);
    };
    match list.len() {
        1 => Ok(Some(vec![list[0].clone(); num_rows])),
        len if len == num_rows => Ok(Some(list.to_vec())),
        len => Err(GradeError::ConfigurationConflict(
            ErrorInfo::new(
                "layout.length",
                format!(
                    "Length of {what} ({len}) must be either 1 or match the length of correct-answer ({num_rows})."
                ),
            )
            .with_context("attribute", what),
        )),
    }
}

/// Prepends `prefix` unless `value` is empty, already prefixed or the unknown value.
pub fn attach_prefix(value: &str, prefix: &str, unknown_value: &str) -> String {
    if value.is_empty() || value.starts_with(prefix) || value.to_lowercase() == unknown_value {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// Lays out every row of the table described by `spec`.
///
/// `config` must be the resolution of `spec`; it supplies the prefix and the
/// unknown value for prefill and placeholder text.
pub fn layout_rows(spec: &TableSpec, config: &TableConfig) -> Result<Vec<RowLayout>, GradeError> {
    let correct = spec.reference_answers()?;
    let num_rows = correct.len();
    let indices = expand_indices(&spec.index_spec()?, num_rows, &config.name)?;
    let prefill = broadcast(spec.prefill.as_deref(), num_rows, "prefill")?;
    let placeholder = broadcast(spec.placeholder.as_deref(), num_rows, "placeholder")?;
    let dress = |value: &String| attach_prefix(value, &config.prefix, &config.unknown_value);

    Ok(correct
        .iter()
        .zip(indices)
        .enumerate()
        .map(|(row, (answer, index_label))| RowLayout {
            cell_name: config.cell_key(row),
            index_label,
            correct: answer.trim().to_string(),
            prefill: prefill.as_ref().map(|list| dress(&list[row])).unwrap_or_default(),
            placeholder: placeholder.as_ref().map(|list| dress(&list[row])),
        })
        .collect())
}

/// Grading rows for a laid-out table.
pub fn rows_for(layout: &[RowLayout], submissions: &BTreeMap<String, String>) -> Vec<Row> {
    layout.iter().map(|row| row.to_row(submissions)).collect()
}
