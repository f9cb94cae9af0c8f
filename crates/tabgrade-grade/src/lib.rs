#![deny(missing_docs)]
#![doc = "Cell validation, answer comparison and score aggregation for tabgrade answer tables."]

/// Score aggregation over rows.
pub mod aggregate;
/// One-call validation plus grading of a submission.
pub mod assess;
/// Submitted versus reference literal comparison.
pub mod compare;
/// Help text describing the expected answer format.
pub mod instructions;
/// Up-front checks on reference answers.
pub mod reference;
/// Per-cell and per-column submission validation.
pub mod validate;

pub use aggregate::{grade, grade_row, GradedCell, Grading};
pub use assess::{assess, Assessment, GradeReport, Outcome, REPORT_SCHEMA};
pub use compare::answers_match;
pub use instructions::{format_instructions, grading_text};
pub use reference::check_reference_answers;
pub use validate::{
    validate_cell, validate_row, RowValidation, LEFT_BLANK, NO_SUBMITTED_ANSWER, WRONG_LENGTH,
};
