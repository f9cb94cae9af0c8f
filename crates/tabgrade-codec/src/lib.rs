#![deny(missing_docs)]
#![doc = "Base codec and two's-complement interpreter for tabgrade literals."]

/// Whitespace, case and prefix normalisation.
pub mod clean;
/// Literal parsing and formatting.
pub mod literal;
/// Two's-complement decode and encode.
pub mod signed;

pub use clean::{clean, digit_text, strip_prefix_once, strip_spaces};
pub use literal::{
    format_literal, format_value, parse_decimal, parse_digits, parse_literal, Literal, Numeral,
    NumericValue,
};
pub use signed::{bits_per_digit, decode_signed, encode_signed, is_negative_digit};
