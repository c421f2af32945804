//! Classification of parsed YAML values.

use serde_yaml::{Mapping, Value};

/// The shape of a YAML value, decided once after parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YamlNode<'a> {
    /// A string, number, boolean or null.
    Primitive(&'a Value),
    /// A sequence.
    List(&'a [Value]),
    /// A mapping.
    Mapping(&'a Mapping),
}

impl<'a> YamlNode<'a> {
    /// Classify a value. Tagged values are classified by what they wrap.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Sequence(items) => YamlNode::List(items),
            Value::Mapping(map) => YamlNode::Mapping(map),
            Value::Tagged(tagged) => YamlNode::classify(&tagged.value),
            other => YamlNode::Primitive(other),
        }
    }

    /// Whether the value reads as a number under loose text coercion.
    ///
    /// Numbers other than NaN, booleans and null do, as do strings with
    /// numeric text. A list does when its comma-joined text is numeric, which
    /// holds for an empty list and for a single numeric element such as `[5]`.
    /// Mappings never do.
    pub fn is_numeric_like(&self) -> bool {
        match self {
            YamlNode::Primitive(Value::String(s)) => is_numeric_text(s),
            YamlNode::Primitive(Value::Number(n)) => !n.as_f64().is_some_and(f64::is_nan),
            YamlNode::Primitive(_) => true,
            YamlNode::List(items) => is_numeric_text(&join_items(items)),
            YamlNode::Mapping(_) => false,
        }
    }

    /// Whether the value is kept whole rather than split into entries:
    /// strings and anything numeric-like.
    pub fn is_scalar_like(&self) -> bool {
        matches!(self, YamlNode::Primitive(Value::String(_))) || self.is_numeric_like()
    }

    /// Keyed entries of a group. Mappings use their keys as text, lists use
    /// element indexes. Primitives have no entries.
    pub fn entries(&self) -> Option<Vec<(String, &'a Value)>> {
        match *self {
            YamlNode::Mapping(map) => Some(map.iter().map(|(k, v)| (key_text(k), v)).collect()),
            YamlNode::List(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, v)| (index.to_string(), v))
                    .collect(),
            ),
            YamlNode::Primitive(_) => None,
        }
    }
}

/// Render a mapping key as text.
pub fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => key_text(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn item_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_nan() => "NaN".to_string(),
            Some(f) if f.is_infinite() && f > 0.0 => "Infinity".to_string(),
            Some(f) if f.is_infinite() => "-Infinity".to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Sequence(items) => join_items(items),
        Value::Mapping(_) => "[object]".to_string(),
        Value::Tagged(tagged) => item_text(&tagged.value),
    }
}

fn join_items(items: &[Value]) -> String {
    items.iter().map(item_text).collect::<Vec<_>>().join(",")
}

/// Whether text converts to a number: blank, decimal (with optional sign and
/// exponent), `Infinity`, or a `0x`/`0o`/`0b` literal.
fn is_numeric_text(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}
