use tabgrade_codec::{format_literal, parse_literal, Literal, NumericValue};
use tabgrade_core::{Base, GradeError, TableConfig};

fn cfg(base: Base) -> TableConfig {
    TableConfig::for_base(base)
}

#[test]
fn decimal_accepts_signs_and_surrounding_space() {
    let lit = parse_literal("  -42 ", &cfg(Base::Decimal)).expect("parse");
    let numeral = lit.as_numeral().expect("numeral");
    assert_eq!(numeral.value, NumericValue::Signed(-42));
    assert_eq!(numeral.digits, "-42");
    assert_eq!(
        parse_literal("+7", &cfg(Base::Decimal)).unwrap().as_numeral().unwrap().value,
        NumericValue::Signed(7)
    );
}

#[test]
fn decimal_keeps_embedded_spaces_invalid() {
    let err = parse_literal("1 000", &cfg(Base::Decimal)).unwrap_err();
    assert!(matches!(err, GradeError::InvalidLiteral(_)));
    assert_eq!(err.info().code, "codec.invalid_digit");
}

#[test]
fn hex_strips_prefix_case_and_spaces() {
    let lit = parse_literal(" 0XDE AD ", &cfg(Base::Hex)).expect("parse");
    let numeral = lit.as_numeral().expect("numeral");
    assert_eq!(numeral.digits, "dead");
    assert_eq!(numeral.value, NumericValue::Unsigned(0xdead));
    assert_eq!(numeral.digit_len(), 4);
}

#[test]
fn hex_prefix_is_optional_but_foreign_prefix_is_invalid() {
    let bare = parse_literal("1f", &cfg(Base::Hex)).expect("parse");
    assert_eq!(bare.as_numeral().unwrap().value, NumericValue::Unsigned(31));

    let dollar = TableConfig {
        prefix: "$".into(),
        ..cfg(Base::Hex)
    };
    assert!(parse_literal("$1f", &dollar).is_ok());
    assert!(parse_literal("0x1f", &dollar).is_err());
    assert!(parse_literal("0x0x1f", &cfg(Base::Hex)).is_err());
}

#[test]
fn binary_rejects_non_binary_digits_and_signs() {
    assert!(parse_literal("0b102", &cfg(Base::Binary)).is_err());
    assert!(parse_literal("-101", &cfg(Base::Binary)).is_err());
    assert!(parse_literal("0b", &cfg(Base::Binary)).is_err());
    let ok = parse_literal("0b1 0 1", &cfg(Base::Binary)).expect("parse");
    assert_eq!(ok.as_numeral().unwrap().value, NumericValue::Unsigned(5));
}

#[test]
fn sentinel_is_not_a_parse_failure() {
    let cfg = TableConfig {
        unknown_value: "x".into(),
        ..cfg(Base::Hex)
    };
    assert_eq!(parse_literal(" X ", &cfg).unwrap(), Literal::Unknown("X".into()));
    assert_eq!(parse_literal("0xX", &cfg).unwrap(), Literal::Unknown("0xX".into()));

    let blank = TableConfig {
        allow_blank: true,
        ..TableConfig::for_base(Base::Decimal)
    };
    assert_eq!(parse_literal("   ", &blank).unwrap(), Literal::Unknown(String::new()));
}

#[test]
fn string_base_passes_text_through() {
    let lit = parse_literal("  Hello World ", &cfg(Base::String)).expect("parse");
    assert_eq!(lit, Literal::Text("Hello World".into()));
    assert_eq!(format_literal(&lit, &cfg(Base::String)), "Hello World");
}

#[test]
fn oversized_literals_are_invalid() {
    let huge = format!("0x1{}", "0".repeat(32));
    let err = parse_literal(&huge, &cfg(Base::Hex)).unwrap_err();
    assert_eq!(err.info().code, "codec.overflow");
    let padded = format!("0x{}1", "0".repeat(40));
    assert!(parse_literal(&padded, &cfg(Base::Hex)).is_ok());
}
