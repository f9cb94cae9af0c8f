//! Parsing and formatting of single table literals.

use serde::{Deserialize, Serialize};
use tabgrade_core::{Base, ErrorInfo, GradeError, TableConfig};

use crate::clean::{clean, strip_prefix_once, strip_spaces};
use crate::signed::{decode_signed, encode_signed, is_negative_digit};

/// Numeric payload of a parsed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericValue {
    /// Decimal literals carry their sign.
    Signed(i128),
    /// Hex/bin literals carry the unsigned magnitude of their digits.
    Unsigned(u128),
}

/// A literal that parsed in a numeric base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeral {
    /// Base the literal was parsed in.
    pub base: Base,
    /// Lower-cased, prefix-free text (spaces removed for hex/bin).
    pub digits: String,
    /// Parsed value.
    pub value: NumericValue,
}

impl Numeral {
    /// Character count of the prefix-free text, as checked against fixed widths.
    pub fn digit_len(&self) -> usize {
        self.digits.chars().count()
    }

    /// Integer value, two's-complement decoded for signed hex/bin.
    pub fn to_i128(&self, signed: bool) -> Result<i128, GradeError> {
        match self.value {
            NumericValue::Signed(value) => Ok(value),
            NumericValue::Unsigned(_) if signed => decode_signed(&self.digits, self.base),
            NumericValue::Unsigned(magnitude) => i128::try_from(magnitude).map_err(|_| {
                GradeError::InvalidLiteral(
                    ErrorInfo::new("codec.overflow", "literal exceeds 128-bit range")
                        .with_context("literal", self.digits.as_str()),
                )
            }),
        }
    }
}

/// Result of parsing one literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// The configured unknown/blank sentinel; holds the trimmed input.
    Unknown(String),
    /// A numeric literal.
    Numeral(Numeral),
    /// String-base passthrough; holds the trimmed input with case preserved.
    Text(String),
}

impl Literal {
    /// Returns the numeral, if the literal is numeric.
    pub fn as_numeral(&self) -> Option<&Numeral> {
        match self {
            Literal::Numeral(numeral) => Some(numeral),
            _ => None,
        }
    }
}

fn invalid(code: &str, message: impl Into<String>, text: &str, base: Base) -> GradeError {
    GradeError::InvalidLiteral(
        ErrorInfo::new(code, message)
            .with_context("literal", text)
            .with_context("base", base.as_str()),
    )
}

/// Parses a prefix-free string of hex or binary digits as an unsigned magnitude.
pub fn parse_digits(text: &str, base: Base) -> Result<u128, GradeError> {
    let Some(radix) = base.radix().filter(|_| base.is_digit_string()) else {
        return Err(invalid(
            "codec.not_digit_string",
            "expected a hex or bin base",
            text,
            base,
        ));
    };
    if text.is_empty() {
        return Err(invalid("codec.empty", "literal has no digits", text, base));
    }
    if let Some(bad) = text.chars().find(|c| !c.is_digit(radix)) {
        return Err(invalid(
            "codec.invalid_digit",
            format!("'{bad}' is not a {} digit", base.describe()),
            text,
            base,
        ));
    }
    u128::from_str_radix(text, radix)
        .map_err(|_| invalid("codec.overflow", "literal exceeds 128-bit range", text, base))
}

/// Parses an optionally signed base-10 integer.
pub fn parse_decimal(text: &str) -> Result<i128, GradeError> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() {
        return Err(invalid("codec.empty", "literal has no digits", text, Base::Decimal));
    }
    if let Some(bad) = unsigned.chars().find(|c| !c.is_ascii_digit()) {
        return Err(invalid(
            "codec.invalid_digit",
            format!("'{bad}' is not a decimal digit"),
            text,
            Base::Decimal,
        ));
    }
    text.parse::<i128>().map_err(|_| {
        invalid(
            "codec.overflow",
            "literal exceeds 128-bit range",
            text,
            Base::Decimal,
        )
    })
}

/// Parses `raw` under `config`.
///
/// The unknown sentinel is recognised before and after prefix removal and is
/// never a numeric failure.
pub fn parse_literal(raw: &str, config: &TableConfig) -> Result<Literal, GradeError> {
    if config.base == Base::String {
        return Ok(Literal::Text(raw.trim().to_string()));
    }
    let cleaned = clean(raw);
    let prefix = config.prefix.to_lowercase();
    let unprefixed = strip_prefix_once(&cleaned, &prefix);
    if cleaned == config.unknown_value || unprefixed == config.unknown_value {
        return Ok(Literal::Unknown(raw.trim().to_string()));
    }
    let numeral = match config.base {
        Base::Decimal => Numeral {
            base: Base::Decimal,
            digits: unprefixed.to_string(),
            value: NumericValue::Signed(parse_decimal(unprefixed)?),
        },
        base => {
            let digits = strip_spaces(unprefixed);
            let magnitude = parse_digits(&digits, base)?;
            Numeral {
                base,
                digits,
                value: NumericValue::Unsigned(magnitude),
            }
        }
    };
    Ok(Literal::Numeral(numeral))
}

/// Formats a parsed literal back to text with the configured prefix.
pub fn format_literal(literal: &Literal, config: &TableConfig) -> String {
    match literal {
        Literal::Unknown(text) | Literal::Text(text) => text.clone(),
        Literal::Numeral(Numeral {
            value: NumericValue::Signed(value),
            ..
        }) => format!("{}{value}", config.prefix),
        Literal::Numeral(numeral) => format!("{}{}", config.prefix, numeral.digits),
    }
}

/// Formats an integer in the configured base, prefix and fixed width.
///
/// Negative hex/bin values need `signed`; without a fixed width they use the
/// fewest two's-complement digits that decode back to `value`.
pub fn format_value(value: i128, config: &TableConfig) -> Result<String, GradeError> {
    let width = config.fixed_width;
    let digits = match config.base {
        Base::String => return Ok(value.to_string()),
        Base::Decimal => {
            let magnitude = value.unsigned_abs().to_string();
            let sign = if value < 0 { "-" } else { "" };
            let pad = width.saturating_sub(sign.len() + magnitude.len());
            format!("{sign}{}{magnitude}", "0".repeat(pad))
        }
        base if value < 0 => {
            if !config.signed {
                return Err(invalid(
                    "codec.negative_unsigned",
                    "negative value in an unsigned base",
                    &value.to_string(),
                    base,
                ));
            }
            if width > 0 {
                encode_signed(value, base, width)?
            } else {
                (1..).find_map(|w| encode_signed(value, base, w).ok()).unwrap_or_default()
            }
        }
        base => {
            let mut natural = match base {
                Base::Hex => format!("{value:x}"),
                _ => format!("{value:b}"),
            };
            if config.signed && natural.starts_with(|c| is_negative_digit(c, base)) {
                natural.insert(0, '0');
            }
            let pad = width.saturating_sub(natural.len());
            format!("{}{natural}", "0".repeat(pad))
        }
    };
    if width > 0 && digits.len() > width {
        return Err(GradeError::FixedWidthMismatch(
            ErrorInfo::new(
                "codec.too_wide",
                format!("{digits} is wider than the fixed width of {width}"),
            )
            .with_context("width", width.to_string()),
        ));
    }
    Ok(format!("{}{digits}", config.prefix))
}
