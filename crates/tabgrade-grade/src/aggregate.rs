use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabgrade_core::{CellScore, Row, TableConfig, TableScore};

use crate::compare::answers_match;

/// Score of one graded cell, keyed the way the host stores partial scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedCell {
    /// Cell key, `<name>_<row>`.
    pub key: String,
    /// Per-cell score and feedback.
    pub score: CellScore,
}

/// Per-cell scores and the table score of one grading pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grading {
    /// Scores for the rows that were graded, in row order.
    pub cells: Vec<GradedCell>,
    /// Table-level score.
    pub table: TableScore,
    /// Rows in the table; the score denominator.
    pub num_rows: usize,
}

impl Grading {
    /// Number of cells that earned credit.
    pub fn correct_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.score.is_correct()).count()
    }

    /// Looks up the score for a cell key.
    pub fn cell(&self, key: &str) -> Option<&CellScore> {
        self.cells
            .iter()
            .find(|cell| cell.key == key)
            .map(|cell| &cell.score)
    }
}

/// Grades every row and folds the cell scores into a table score.
///
/// The denominator is always `rows.len()`. Grading stops at the first row
/// without a reference literal; the rows after it stay unscored but still
/// count towards the denominator.
pub fn grade(rows: &[Row], config: &TableConfig) -> Grading {
    grade_with_rejections(rows, config, |_| false)
}

/// Like [`grade`], but rows for which `rejected` holds score as incorrect
/// without comparison when a submission is present.
pub(crate) fn grade_with_rejections(
    rows: &[Row],
    config: &TableConfig,
    rejected: impl Fn(usize) -> bool,
) -> Grading {
    let num_rows = rows.len();
    let mut cells = Vec::with_capacity(num_rows);
    let mut any_incorrect = false;
    for (row_index, row) in rows.iter().enumerate() {
        let Some(correct) = row.correct.as_deref() else {
            log::warn!(
                "{}: no reference answer for row {row_index}, {} of {num_rows} rows left ungraded",
                config.name,
                num_rows - row_index
            );
            break;
        };
        let score = match row.submitted.as_deref() {
            Some(_) if rejected(row_index) => CellScore::incorrect(),
            Some(submitted) if answers_match(submitted, correct, config) => CellScore::correct(),
            Some(_) => CellScore::incorrect(),
            None => CellScore::missing(),
        };
        any_incorrect |= !score.is_correct();
        cells.push(GradedCell {
            key: config.cell_key(row_index),
            score,
        });
    }

    let earned = cells.iter().filter(|cell| cell.score.is_correct()).count();
    let score = if num_rows == 0 || (!config.partial_credit && any_incorrect) {
        0.0
    } else {
        earned as f64 / num_rows as f64
    };
    log::info!(
        "{}: graded {} of {num_rows} rows, {earned} correct, score {score:.3}",
        config.name,
        cells.len()
    );
    Grading {
        cells,
        table: TableScore {
            score,
            weight: config.weight,
        },
        num_rows,
    }
}

/// Grades a reference list against submissions keyed by cell name.
///
/// Submissions beyond the reference list are ignored; missing keys grade as
/// "Missing input.".
pub fn grade_row(
    correct: &[String],
    submitted: &BTreeMap<String, String>,
    config: &TableConfig,
) -> Grading {
    let rows: Vec<Row> = correct
        .iter()
        .enumerate()
        .map(|(row_index, answer)| Row {
            index_label: row_index.to_string(),
            correct: Some(answer.clone()),
            submitted: submitted.get(&config.cell_key(row_index)).cloned(),
        })
        .collect();
    grade(&rows, config)
}
