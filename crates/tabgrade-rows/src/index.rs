use tabgrade_codec::{clean, parse_decimal, parse_digits, strip_prefix_once};
use tabgrade_core::{Base, ErrorInfo, GradeError, IndexSpec, PrefixTable};

/// Message raised when formatting options accompany a full index list.
pub const AMBIGUOUS_INDEX: &str =
    "Index base/prefix/fixed width should not be specified when a complete list of indices is provided.";

/// Produces one index label per row.
///
/// A list with one entry per row is used verbatim. A single value is a start
/// value and expands to `start, start+1, ...` in the index base with the
/// index prefix. A one-row table with formatting options is treated as a
/// start value so the options apply.
///
/// With a fixed width, every generated label must fit, so the check is made
/// against the widest label rather than the last one. The two only differ
/// for negative decimal starts such as `-10, -9, ...`, where the first label
/// is the widest.
pub fn expand_indices(
    spec: &IndexSpec,
    num_rows: usize,
    name: &str,
) -> Result<Vec<String>, GradeError> {
    match spec.values.len() {
        0 => Err(GradeError::ConfigurationConflict(
            ErrorInfo::new("index.empty", "index must hold a start value or one label per row")
                .with_context("table", name),
        )),
        1 if num_rows != 1 || spec.has_formatting() => expand_from_start(spec, num_rows, name),
        len if len == num_rows => {
            if spec.has_formatting() {
                return Err(GradeError::ConfigurationConflict(
                    ErrorInfo::new("index.ambiguous", AMBIGUOUS_INDEX).with_context("table", name),
                ));
            }
            Ok(spec.values.iter().map(|label| label.trim().to_string()).collect())
        }
        len => Err(GradeError::ConfigurationConflict(
            ErrorInfo::new(
                "index.length",
                format!(
                    "Length of index ({len}) must either match the length of correct-answer ({num_rows}) or be a single start address."
                ),
            )
            .with_context("table", name),
        )),
    }
}

fn expand_from_start(
    spec: &IndexSpec,
    num_rows: usize,
    name: &str,
) -> Result<Vec<String>, GradeError> {
    let base = spec.base.unwrap_or(Base::Decimal);
    if base == Base::String {
        return Err(GradeError::ConfigurationConflict(
            ErrorInfo::new(
                "index.string_base",
                "Invalid base 'string' for index-base. Must be one of dec, hex, bin.",
            )
            .with_context("table", name),
        ));
    }
    let prefix = spec
        .prefix
        .clone()
        .unwrap_or_else(|| PrefixTable::standard().prefix_for(base).to_string());
    let width = spec.fixed_width.unwrap_or(0);
    let start_text = &spec.values[0];
    let start = parse_start(start_text, base, &prefix)?;

    if num_rows == 0 {
        return Ok(Vec::new());
    }
    let last = i128::try_from(num_rows - 1)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .ok_or_else(|| {
            GradeError::InvalidStartValue(
                ErrorInfo::new(
                    "index.overflow",
                    format!("index sequence from '{start_text}' over {num_rows} rows overflows"),
                )
                .with_context("table", name),
            )
        })?;

    let naturals: Vec<String> = (start..=last).map(|value| natural_digits(value, base)).collect();
    if width > 0 {
        if let Some(widest) = naturals.iter().max_by_key(|digits| digits.len()) {
            if widest.len() > width {
                return Err(GradeError::ConfigurationConflict(
                    ErrorInfo::new(
                        "index.width",
                        format!(
                            "Width of one or more index values is greater than fixed width of {width} in \"{name}\". For instance, {widest}."
                        ),
                    )
                    .with_context("table", name)
                    .with_context("value", widest.as_str()),
                ));
            }
        }
    }
    log::debug!("{name}: expanded {num_rows} {base} indices from '{start_text}'");
    Ok(naturals
        .into_iter()
        .map(|digits| format!("{prefix}{}", zero_pad(&digits, width)))
        .collect())
}

fn parse_start(text: &str, base: Base, prefix: &str) -> Result<i128, GradeError> {
    let cleaned = clean(text);
    let mut digits = strip_prefix_once(&cleaned, &prefix.to_lowercase());
    if digits.len() == cleaned.len() {
        digits = strip_prefix_once(digits, PrefixTable::standard().prefix_for(base));
    }
    let parsed = match base {
        Base::Decimal => parse_decimal(digits),
        _ => parse_digits(digits, base).and_then(|magnitude| {
            i128::try_from(magnitude)
                .map_err(|_| GradeError::conflict("codec.overflow", "start exceeds 128-bit range"))
        }),
    };
    parsed.map_err(|err| {
        GradeError::InvalidStartValue(
            ErrorInfo::new(
                "index.invalid_start",
                format!(
                    "Invalid index '{text}' for base '{base}'. Ensure the value matches the chosen base."
                ),
            )
            .with_context("cause", err.info().code.as_str()),
        )
    })
}

fn natural_digits(value: i128, base: Base) -> String {
    match base {
        Base::Hex => format!("{value:X}"),
        Base::Binary => format!("{value:b}"),
        _ => value.to_string(),
    }
}

/// Pads with zeros after any sign up to `width` characters.
fn zero_pad(digits: &str, width: usize) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let pad = width.saturating_sub(digits.len());
    format!("{sign}{}{magnitude}", "0".repeat(pad))
}
