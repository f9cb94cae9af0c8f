use tabgrade_core::errors::{ErrorInfo, GradeError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("table", "q1")
        .with_context("literal", "0xzz")
}

#[test]
fn invalid_literal_surface() {
    let err = GradeError::InvalidLiteral(sample_info("codec.invalid_digit", "bad digit"));
    assert_eq!(err.info().code, "codec.invalid_digit");
    assert!(err.info().context.contains_key("literal"));
}

#[test]
fn configuration_conflict_surface() {
    let err = GradeError::conflict("config.index_ambiguous", "ambiguous index");
    assert_eq!(err.info().code, "config.index_ambiguous");
    assert!(err.info().context.is_empty());
}

#[test]
fn display_includes_context_and_hint() {
    let err = GradeError::MissingReferenceAnswer(
        sample_info("reference.missing", "Missing correct answer for q1").with_hint("set it"),
    );
    let text = err.to_string();
    assert!(text.starts_with("missing reference answer: Missing correct answer for q1"));
    assert!(text.contains("literal=0xzz, table=q1"));
    assert!(text.ends_with("| hint: set it"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = GradeError::FixedWidthMismatch(sample_info("width", "too long"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "FixedWidthMismatch");
    assert_eq!(json["detail"]["code"], "width");
    let back: GradeError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}
