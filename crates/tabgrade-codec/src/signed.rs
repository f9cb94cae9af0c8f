//! Two's-complement interpretation of hexadecimal and binary digit strings.
//!
//! The width used for the sign bit is the length of the digit string itself,
//! so two literals of different lengths are each decoded at their own width.

use tabgrade_core::{Base, ErrorInfo, GradeError};

use crate::literal::parse_digits;

/// Bits carried by one digit of `base`.
pub fn bits_per_digit(base: Base) -> Result<usize, GradeError> {
    match base {
        Base::Hex => Ok(4),
        Base::Binary => Ok(1),
        other => Err(GradeError::InvalidLiteral(
            ErrorInfo::new(
                "codec.not_digit_string",
                "two's complement applies to hex and bin literals only",
            )
            .with_context("base", other.as_str()),
        )),
    }
}

/// Whether `digit` as the most significant digit marks a negative value.
pub fn is_negative_digit(digit: char, base: Base) -> bool {
    match base {
        Base::Hex => matches!(digit.to_ascii_lowercase(), '8'..='9' | 'a'..='f'),
        Base::Binary => digit == '1',
        _ => false,
    }
}

fn fill_digit(base: Base) -> char {
    if base == Base::Hex {
        'f'
    } else {
        '1'
    }
}

/// Decodes a prefix-free digit string as a two's-complement integer.
pub fn decode_signed(digits: &str, base: Base) -> Result<i128, GradeError> {
    let bits = bits_per_digit(base)?;
    let digits = sign_trimmed(digits, base, bits)?;
    let magnitude = parse_digits(digits, base)?;
    let negative = digits
        .chars()
        .next()
        .is_some_and(|msd| is_negative_digit(msd, base));
    if !negative {
        return i128::try_from(magnitude).map_err(|_| overflow(digits, base));
    }
    let width = digits.len() * bits;
    let mask = if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    };
    // Below 2^127 because the top bit of `magnitude` is set.
    let inverted = (magnitude ^ mask) as i128;
    Ok(-inverted - 1)
}

/// Encodes `value` as exactly `width` two's-complement digits.
pub fn encode_signed(value: i128, base: Base, width: usize) -> Result<String, GradeError> {
    bits_per_digit(base)?;
    let full = match base {
        Base::Hex => format!("{:032x}", value as u128),
        _ => format!("{:0128b}", value as u128),
    };
    let encoded = if width <= full.len() {
        full[full.len() - width..].to_string()
    } else {
        let fill = if value < 0 { fill_digit(base) } else { '0' };
        let mut padded: String = std::iter::repeat(fill).take(width - full.len()).collect();
        padded.push_str(&full);
        padded
    };
    if width == 0 || decode_signed(&encoded, base)? != value {
        return Err(GradeError::FixedWidthMismatch(
            ErrorInfo::new(
                "codec.signed_range",
                format!("{value} does not fit in {width} signed {} digits", base.describe()),
            )
            .with_context("width", width.to_string()),
        ));
    }
    Ok(encoded)
}

/// Drops redundant leading sign digits beyond native width.
fn sign_trimmed(digits: &str, base: Base, bits: usize) -> Result<&str, GradeError> {
    let max = 128 / bits;
    if digits.len() <= max {
        return Ok(digits);
    }
    // Validated before slicing: the split below is a byte offset.
    let radix = base.radix().unwrap_or(16);
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(GradeError::InvalidLiteral(
            ErrorInfo::new(
                "codec.invalid_digit",
                format!("'{bad}' is not a {} digit", base.describe()),
            )
            .with_context("base", base.as_str()),
        ));
    }
    let (head, tail) = digits.split_at(digits.len() - max);
    let fill = head.chars().next().unwrap_or('0');
    let extension_ok = head.chars().all(|c| c == fill)
        && tail
            .chars()
            .next()
            .is_some_and(|msd| is_negative_digit(msd, base) == (fill != '0'))
        && (fill == '0' || fill == fill_digit(base));
    if extension_ok {
        Ok(tail)
    } else {
        Err(overflow(digits, base))
    }
}

fn overflow(digits: &str, base: Base) -> GradeError {
    GradeError::InvalidLiteral(
        ErrorInfo::new("codec.overflow", "literal exceeds 128-bit range")
            .with_context("literal", digits)
            .with_context("base", base.as_str()),
    )
}
