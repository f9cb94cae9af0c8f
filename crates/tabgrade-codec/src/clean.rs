/// Trims surrounding whitespace and lower-cases.
pub fn clean(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Removes `prefix` once from the front of `text`; an empty prefix is a no-op.
pub fn strip_prefix_once<'a>(text: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return text;
    }
    text.strip_prefix(prefix).unwrap_or(text)
}

/// Drops embedded spaces, as typed in grouped digit strings like `ff 00`.
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// Cleaned, prefix-free digit text for a hex/bin literal.
///
/// The prefix is matched case-insensitively since `text` is lower-cased first.
pub fn digit_text(raw: &str, prefix: &str) -> String {
    let cleaned = clean(raw);
    let prefix = prefix.to_lowercase();
    strip_spaces(strip_prefix_once(&cleaned, &prefix))
}
