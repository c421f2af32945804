//! Inline field parsing (Dataview-style `key:: value` lines).

use crate::types::InlineField;

const DELIMITER: &str = "::";

/// Parse one line as an inline field.
///
/// `key:: value` yields the untrimmed key and the trimmed value; anything after
/// a second `::` is dropped. A line that has the delimiter but an empty side
/// (`key::`, `::value`) yields the line minus its first `::` with an empty
/// value. Lines without the delimiter yield nothing.
pub fn parse_inline_field(line: &str) -> Option<(String, String)> {
    let mut parts = line.split(DELIMITER);
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();

    if !key.is_empty() && !value.is_empty() {
        Some((key.to_string(), value.trim().to_string()))
    } else if line.contains(DELIMITER) {
        Some((line.replacen(DELIMITER, "", 1), String::new()))
    } else {
        None
    }
}

/// Parse every line of `content` for inline fields, in line order.
///
/// Duplicate keys are kept as they appear.
pub fn parse_inline_fields(content: &str) -> Vec<InlineField> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            parse_inline_field(line).map(|(key, value)| InlineField {
                key,
                value,
                line: index + 1,
            })
        })
        .collect()
}
