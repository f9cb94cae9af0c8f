use tabgrade_core::{Base, TableConfig};
use tabgrade_grade::answers_match;

fn hex(width: usize, signed: bool, strict: bool) -> TableConfig {
    TableConfig {
        fixed_width: width,
        signed,
        strict_grading: strict,
        ..TableConfig::for_base(Base::Hex)
    }
}

#[test]
fn string_base_is_case_sensitive_after_trim() {
    let cfg = TableConfig::for_base(Base::String);
    assert!(answers_match(" abc ", "abc", &cfg));
    assert!(!answers_match("ABC", "abc", &cfg));
}

#[test]
fn decimal_compares_integer_values() {
    let cfg = TableConfig::default();
    assert!(answers_match("007", "7", &cfg));
    assert!(answers_match("+3", "3", &cfg));
    assert!(!answers_match("-3", "3", &cfg));
    assert!(!answers_match("three", "3", &cfg));
}

#[test]
fn signed_hex_decodes_each_side_at_its_own_width() {
    let cfg = hex(2, true, false);
    assert!(answers_match("0xff", "0xff", &cfg));
    assert!(answers_match("0xff", "0xf", &cfg));
    assert!(!answers_match("0xff", "0x0ff", &cfg));
    assert!(answers_match("0xFF", "0xff", &cfg));
}

#[test]
fn unsigned_hex_compares_magnitudes() {
    let cfg = hex(0, false, false);
    assert!(answers_match("0xff", "0x00ff", &cfg));
    assert!(!answers_match("0xff", "0xf", &cfg));
    assert!(answers_match("0xff 00", "0xff00", &cfg));
}

#[test]
fn strict_fixed_width_requires_exact_digits() {
    let cfg = TableConfig {
        fixed_width: 4,
        strict_grading: true,
        ..TableConfig::for_base(Base::Binary)
    };
    assert!(!answers_match("0b110", "0b0110", &cfg));
    assert!(answers_match("0b0110", "0b0110", &cfg));
    assert!(answers_match("0110", "0b0110", &cfg));

    let strict_hex = hex(2, true, true);
    assert!(!answers_match("0xf", "0xff", &strict_hex));
}

#[test]
fn signed_binary_decodes_the_reference_from_its_own_digits() {
    let cfg = TableConfig::for_base(Base::Binary);
    assert!(answers_match("0b1110", "0b10", &cfg));
    assert!(!answers_match("0b1110", "0b0110", &cfg));
    assert!(!answers_match("0b0110", "0b1110", &cfg));
}

#[test]
fn sentinel_rules() {
    let cfg = TableConfig {
        unknown_value: "x".into(),
        ..TableConfig::for_base(Base::Hex)
    };
    assert!(answers_match("X", "x", &cfg));
    assert!(!answers_match("0x1", "x", &cfg));
    assert!(!answers_match("x", "0x1", &cfg));
}

#[test]
fn allow_blank_rules() {
    let cfg = TableConfig {
        allow_blank: true,
        unknown_value: "x".into(),
        ..TableConfig::default()
    };
    assert!(answers_match("", "", &cfg));
    assert!(!answers_match("", "4", &cfg));
    assert!(!answers_match("4", "", &cfg));

    let blank_sentinel = TableConfig {
        allow_blank: true,
        ..TableConfig::default()
    };
    assert!(answers_match("", "", &blank_sentinel));
    assert!(!answers_match("", "4", &blank_sentinel));
}

#[test]
fn custom_decimal_prefix_is_stripped() {
    let cfg = TableConfig {
        prefix: "#".into(),
        ..TableConfig::default()
    };
    assert!(answers_match("#12", "12", &cfg));
}

#[test]
fn over_wide_non_digit_submission_is_a_mismatch() {
    let cfg = TableConfig::for_base(Base::Hex);
    assert!(!answers_match(&"€".repeat(11), "0xff", &cfg));
    let bin = TableConfig::for_base(Base::Binary);
    assert!(!answers_match(&"é".repeat(80), "0b1", &bin));
}
