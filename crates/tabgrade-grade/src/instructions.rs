use tabgrade_core::{Base, TableConfig};

/// Builds the sentence describing the expected answer format.
pub fn format_instructions(config: &TableConfig) -> String {
    let blank_lead = if config.allow_blank {
        "(You may leave this completely blank. If you choose not to, follow the next formatting instructions for your inputs.)"
    } else {
        ""
    };
    let signedness = match config.base {
        Base::Hex | Base::Binary if config.signed => "a signed ",
        Base::Hex | Base::Binary => "an unsigned ",
        _ => "",
    };
    let base = match config.base {
        Base::Decimal => "a decimal",
        Base::Hex => "hexadecimal",
        Base::Binary => "binary",
        Base::String => "a string",
    };
    let width = if config.fixed_width > 0 {
        format!(" with {} digits (excluding any prefix)", config.fixed_width)
    } else {
        String::new()
    };
    let unknown = if config.unknown_value.is_empty() {
        "blank".to_string()
    } else {
        format!("\"{}\"", config.unknown_value)
    };
    format!("{blank_lead} Your answer must be {signedness}{base} value{width} or {unknown}.")
        .trim_start()
        .to_string()
}

/// Format instructions followed by the grading policy sentence.
pub fn grading_text(config: &TableConfig) -> String {
    let policy = match (config.show_partial_score, config.partial_credit) {
        (true, true) => "You will receive credit per correct cell, and feedback on which cells are filled out correctly.",
        (true, false) => "You will receive feedback on which cells are correct, but no partial credit unless the entire table is filled correctly.",
        (false, true) => "You will receive credit per correct cell, but no detailed feedback on which cells are correct.",
        (false, false) => "You will not receive partial credit unless the entire table is filled correctly.",
    };
    format!("{} {policy}", format_instructions(config))
}
