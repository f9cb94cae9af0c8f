use tabgrade_codec::{
    decode_signed, parse_decimal, parse_digits, strip_prefix_once, strip_spaces,
};
use tabgrade_core::{Base, GradeError, TableConfig};

/// Decides whether a submitted literal matches the reference literal.
///
/// Parse failures on either side count as a mismatch; callers are expected
/// to pass submissions that went through [`crate::validate_cell`] and
/// reference answers checked by [`crate::check_reference_answers`].
pub fn answers_match(submitted: &str, correct: &str, config: &TableConfig) -> bool {
    match compare(submitted, correct, config) {
        Ok(equal) => equal,
        Err(err) => {
            log::debug!(
                "{}: treating '{submitted}' vs '{correct}' as a mismatch: {}",
                config.name,
                err.info().message
            );
            false
        }
    }
}

fn compare(submitted: &str, correct: &str, config: &TableConfig) -> Result<bool, GradeError> {
    let submitted = submitted.trim();
    let correct = correct.trim();
    if config.base == Base::String {
        return Ok(submitted == correct);
    }

    let submitted = submitted.to_lowercase();
    let correct = correct.to_lowercase();
    let unknown = config.unknown_value.as_str();
    if correct == unknown {
        return Ok(submitted == correct);
    }
    if submitted == unknown {
        return Ok(false);
    }
    if config.allow_blank && submitted.is_empty() && !unknown.is_empty() {
        return Ok(submitted == correct);
    }
    if config.allow_blank && correct.is_empty() && !submitted.is_empty() {
        return Ok(false);
    }

    let prefix = config.prefix.to_lowercase();
    if config.base == Base::Decimal {
        let submitted = parse_decimal(strip_prefix_once(&submitted, &prefix))?;
        let correct = parse_decimal(strip_prefix_once(&correct, &prefix))?;
        return Ok(submitted == correct);
    }

    let submitted = strip_spaces(strip_prefix_once(&submitted, &prefix));
    let correct = strip_spaces(strip_prefix_once(&correct, &prefix));
    if config.fixed_width > 0 && config.strict_grading {
        // Canonical form is required: same width, same digits.
        return Ok(submitted.len() == config.fixed_width && submitted == correct);
    }
    if config.signed {
        Ok(decode_signed(&submitted, config.base)? == decode_signed(&correct, config.base)?)
    } else {
        Ok(parse_digits(&submitted, config.base)? == parse_digits(&correct, config.base)?)
    }
}
