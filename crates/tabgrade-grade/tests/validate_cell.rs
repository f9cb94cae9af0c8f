use tabgrade_core::{Base, CellResult, FormatErrorKind, TableConfig};
use tabgrade_grade::{validate_cell, validate_row, RowValidation, LEFT_BLANK, WRONG_LENGTH};

fn kind(result: &CellResult) -> Option<FormatErrorKind> {
    result.format_error().map(|err| err.kind)
}

#[test]
fn missing_key_is_a_format_error() {
    let result = validate_cell(None, &TableConfig::default());
    assert_eq!(kind(&result), Some(FormatErrorKind::MissingSubmission));
    assert_eq!(result.format_error().unwrap().message, "No submitted answer.");
}

#[test]
fn blank_is_rejected_only_when_sentinel_is_not_blank() {
    let cfg = TableConfig {
        unknown_value: "x".into(),
        ..TableConfig::default()
    };
    let result = validate_cell(Some(""), &cfg);
    assert_eq!(result.format_error().unwrap().message, LEFT_BLANK);

    let blank_sentinel = TableConfig::default();
    assert_eq!(
        validate_cell(Some(""), &blank_sentinel),
        CellResult::Normalized(String::new())
    );
}

#[test]
fn invalid_literal_names_base_and_alternative() {
    let hex = TableConfig {
        unknown_value: "?".into(),
        ..TableConfig::for_base(Base::Hex)
    };
    let result = validate_cell(Some("0xg1"), &hex);
    assert_eq!(kind(&result), Some(FormatErrorKind::InvalidLiteral));
    assert_eq!(
        result.format_error().unwrap().message,
        "Invalid format. The submitted answer must be a valid hexadecimal number or '?'."
    );

    let dec = TableConfig::default();
    assert_eq!(
        validate_cell(Some("12a"), &dec).format_error().unwrap().message,
        "Invalid format. The submitted answer must be a valid decimal or blank."
    );
    let bin = TableConfig::for_base(Base::Binary);
    assert!(validate_cell(Some("0b12"), &bin)
        .format_error()
        .unwrap()
        .message
        .contains("valid binary number"));
}

#[test]
fn string_base_keeps_raw_value() {
    let cfg = TableConfig::for_base(Base::String);
    assert_eq!(
        validate_cell(Some("  Mixed Case "), &cfg),
        CellResult::Normalized("  Mixed Case ".into())
    );
}

#[test]
fn sentinel_skips_width_check() {
    let cfg = TableConfig {
        fixed_width: 4,
        unknown_value: "x".into(),
        ..TableConfig::for_base(Base::Hex)
    };
    assert_eq!(validate_cell(Some("X"), &cfg), CellResult::Normalized("X".into()));
}

#[test]
fn width_is_checked_at_validation_unless_strict() {
    let cfg = TableConfig {
        fixed_width: 4,
        ..TableConfig::for_base(Base::Binary)
    };
    let short = validate_cell(Some("0b110"), &cfg);
    assert_eq!(kind(&short), Some(FormatErrorKind::FixedWidthMismatch));
    assert_eq!(short.format_error().unwrap().message, WRONG_LENGTH);
    assert!(validate_cell(Some("0b 0110"), &cfg).is_ok());

    let strict = TableConfig {
        strict_grading: true,
        ..cfg
    };
    assert_eq!(
        validate_cell(Some("0b110"), &strict),
        CellResult::Normalized("0b110".into())
    );
}

#[test]
fn decimal_width_counts_the_sign() {
    let cfg = TableConfig {
        fixed_width: 3,
        ..TableConfig::default()
    };
    assert!(validate_cell(Some("-12"), &cfg).is_ok());
    assert!(!validate_cell(Some("12"), &cfg).is_ok());
}

#[test]
fn all_blank_row_short_circuits_with_allow_blank() {
    let cfg = TableConfig {
        allow_blank: true,
        ..TableConfig::default()
    };
    let raw = vec![Some(String::new()), None, Some(String::new())];
    let validation = validate_row(&raw, &cfg);
    assert_eq!(validation, RowValidation::Blank);
    assert_eq!(validation.format_errors().count(), 0);

    let without = TableConfig::default();
    let validation = validate_row(&raw, &without);
    let errors: Vec<_> = validation.format_errors().map(|(row, _)| row).collect();
    assert_eq!(errors, vec![1]);
}

#[test]
fn partially_blank_row_is_validated_cell_by_cell() {
    let cfg = TableConfig {
        allow_blank: true,
        unknown_value: "x".into(),
        ..TableConfig::default()
    };
    let raw = vec![Some("5".to_string()), Some(String::new())];
    let RowValidation::Cells(cells) = validate_row(&raw, &cfg) else {
        panic!("expected per-cell results");
    };
    assert!(cells[0].is_ok());
    assert_eq!(kind(&cells[1]), Some(FormatErrorKind::Blank));
}
