use std::collections::BTreeMap;

use tabgrade_core::{Base, FormatErrorKind, TableConfig, FEEDBACK_INCORRECT, FEEDBACK_MISSING};
use tabgrade_grade::{assess, GradeReport, Outcome, REPORT_SCHEMA};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn submissions(cfg: &TableConfig, values: &[Option<&str>]) -> BTreeMap<String, String> {
    values
        .iter()
        .enumerate()
        .filter_map(|(row, value)| value.map(|v| (cfg.cell_key(row), v.to_string())))
        .collect()
}

#[test]
fn all_blank_table_is_not_graded() {
    let cfg = TableConfig {
        allow_blank: true,
        ..TableConfig::default()
    };
    let correct = strings(&["1", "2", "3"]);
    let subs = submissions(&cfg, &[Some(""), Some(""), Some("")]);
    let assessment = assess(&correct, &subs, &cfg);
    assert_eq!(assessment.outcome, Outcome::Blank);
    assert!(assessment.format_errors.is_empty());
    assert!(assessment.grading().is_none());
}

#[test]
fn material_tables_are_skipped() {
    let cfg = TableConfig {
        is_material: true,
        ..TableConfig::default()
    };
    let assessment = assess(&strings(&["1"]), &BTreeMap::new(), &cfg);
    assert_eq!(assessment.outcome, Outcome::Material);
}

#[test]
fn each_cell_gets_exactly_one_of_value_or_error() {
    let cfg = TableConfig {
        fixed_width: 2,
        unknown_value: "x".into(),
        ..TableConfig::for_base(Base::Hex)
    };
    let correct = strings(&["0x0f", "0x10", "0x20", "x", "0x7f"]);
    let subs = submissions(&cfg, &[Some("0x0f"), Some("0xzz"), Some("0x020"), Some("X"), None]);
    let assessment = assess(&correct, &subs, &cfg);

    for row in 0..correct.len() {
        let key = cfg.cell_key(row);
        let has_value = assessment.normalized.contains_key(&key);
        let has_error = assessment.format_errors.contains_key(&key);
        assert!(has_value ^ has_error, "row {row}");
    }
    assert_eq!(
        assessment.format_errors[&cfg.cell_key(1)].kind,
        FormatErrorKind::InvalidLiteral
    );
    assert_eq!(
        assessment.format_errors[&cfg.cell_key(2)].kind,
        FormatErrorKind::FixedWidthMismatch
    );
    assert_eq!(
        assessment.format_errors[&cfg.cell_key(4)].kind,
        FormatErrorKind::MissingSubmission
    );

    let grading = assessment.grading().expect("graded");
    let feedback: Vec<&str> = grading
        .cells
        .iter()
        .map(|cell| cell.score.feedback.as_str())
        .collect();
    assert_eq!(
        feedback,
        vec!["Correct.", FEEDBACK_INCORRECT, FEEDBACK_INCORRECT, "Correct.", FEEDBACK_MISSING]
    );
    assert!((grading.table.score - 0.4).abs() < 1e-12);
}

#[test]
fn report_carries_schema_and_config_hash() {
    let cfg = TableConfig::default();
    let correct = strings(&["1"]);
    let assessment = assess(&correct, &submissions(&cfg, &[Some("1")]), &cfg);
    let report = GradeReport::new(assessment, &cfg).expect("report");
    assert_eq!(report.schema_version, REPORT_SCHEMA);
    assert_eq!(report.config_hash.len(), 64);

    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"kind\":\"graded\""));
    let decoded: GradeReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, report);
}
