//! Shared types for metaedit.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Where a property was found in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// A tag recorded in the note's metadata cache.
    Tag,
    /// A key in the YAML frontmatter block.
    Yaml,
    /// An inline `key:: value` field in the note body.
    Dataview,
}

impl PropertyKind {
    /// Returns a string representation for output.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Tag => "tag",
            PropertyKind::Yaml => "yaml",
            PropertyKind::Dataview => "dataview",
        }
    }
}

/// One extracted metadata item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The property key. For tags this is the tag text including `#`;
    /// for nested frontmatter groups it is `outer.inner`.
    pub key: String,

    /// The property value, as parsed.
    pub content: Value,

    /// The source of this property.
    #[serde(rename = "type")]
    pub kind: PropertyKind,
}

impl Property {
    /// Create a property from a tag; the content repeats the tag text.
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            content: Value::String(tag.clone()),
            key: tag,
            kind: PropertyKind::Tag,
        }
    }

    /// Create a frontmatter property.
    pub fn yaml(key: impl Into<String>, content: Value) -> Self {
        Self {
            key: key.into(),
            content,
            kind: PropertyKind::Yaml,
        }
    }

    /// Create an inline field property.
    pub fn dataview(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: Value::String(content.into()),
            kind: PropertyKind::Dataview,
        }
    }

    /// Returns the content as a string slice, if it is a string.
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_str()
    }
}

/// An inline `key:: value` field found on one line of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineField {
    /// Text before the first `::`, untrimmed. For a malformed field this is
    /// the whole line with its first `::` removed.
    pub key: String,

    /// Trimmed text between the first and second `::`, or empty for a
    /// malformed field.
    pub value: String,

    /// Line number where this field appears (1-indexed).
    pub line: usize,
}

impl From<InlineField> for Property {
    fn from(field: InlineField) -> Self {
        Property::dataview(field.key, field.value)
    }
}
