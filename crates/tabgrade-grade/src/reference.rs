use tabgrade_codec::{digit_text, parse_literal, Literal};
use tabgrade_core::{Base, ErrorInfo, GradeError, TableConfig};

/// Checks reference answers before any row is processed.
///
/// Every literal that is not the unknown value (or blank, when blanks are
/// allowed) must parse in the configured base, and hex/bin literals must
/// match a nonzero fixed width.
pub fn check_reference_answers(correct: &[String], config: &TableConfig) -> Result<(), GradeError> {
    if correct.is_empty() {
        return Err(GradeError::MissingReferenceAnswer(ErrorInfo::new(
            "reference.missing",
            format!("Missing correct answer for {}", config.name),
        )));
    }
    if config.base == Base::String {
        return Ok(());
    }
    for (row, answer) in correct.iter().enumerate() {
        if is_placeholder_answer(answer, config) {
            continue;
        }
        match parse_literal(answer, config) {
            Ok(Literal::Numeral(_)) => {}
            Ok(_) => continue,
            Err(err) => {
                return Err(GradeError::InvalidLiteral(
                    ErrorInfo::new(
                        "reference.invalid_literal",
                        format!(
                            "data-base is set to \"{}\" in question {}, however one or more of the correct-answer values is an invalid {} number",
                            config.base,
                            config.name,
                            config.base.describe()
                        ),
                    )
                    .with_context("row", row.to_string())
                    .with_context("literal", answer.as_str())
                    .with_context("cause", err.info().code.as_str()),
                ));
            }
        }
        if config.base.is_digit_string() && config.fixed_width > 0 {
            let digits = digit_text(answer, &config.prefix);
            if digits.len() != config.fixed_width {
                return Err(GradeError::FixedWidthMismatch(
                    ErrorInfo::new(
                        "reference.width",
                        format!(
                            "Width of one or more correct-answer values after its prefix does not match fixed width of {} in \"{}\"",
                            config.fixed_width, config.name
                        ),
                    )
                    .with_context("row", row.to_string())
                    .with_context("literal", answer.as_str())
                    .with_hint("unknown-value answers are exempt from the width check"),
                ));
            }
        }
    }
    Ok(())
}

fn is_placeholder_answer(answer: &str, config: &TableConfig) -> bool {
    let cleaned = answer.trim().to_lowercase();
    cleaned == config.unknown_value || (config.allow_blank && cleaned.is_empty())
}
