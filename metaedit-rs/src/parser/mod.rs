//! Parsers for note metadata syntax.

pub mod code_span;
pub mod frontmatter;
pub mod inline_field;
pub mod tag;
pub mod yaml_node;

pub use code_span::{code_spans, in_code};
pub use frontmatter::{locate_frontmatter, parse_yaml, slice_lines};
pub use inline_field::{parse_inline_field, parse_inline_fields};
pub use tag::scan_tags;
pub use yaml_node::{key_text, YamlNode};
