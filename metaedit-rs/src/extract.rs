//! Property extraction from notes.
//!
//! [`MetaEditParser`] turns what a [`MetadataHost`] knows about a note into
//! flat lists of [`Property`] values:
//!
//! - tags come straight from the host's metadata cache,
//! - frontmatter is re-read from the raw text using the cached line range
//!   and flattened one level deep,
//! - inline `key:: value` fields are scanned line by line.
//!
//! # Example
//!
//! ```no_run
//! use metaedit::{MetaEditParser, Vault};
//! use std::path::Path;
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let parser = MetaEditParser::new(&vault);
//!
//! for prop in parser.parse_frontmatter(Path::new("note.md")).unwrap() {
//!     println!("{} = {:?}", prop.key, prop.content);
//! }
//! ```

use crate::error::{MetaEditError, Result};
use crate::host::MetadataHost;
use crate::parser::{parse_inline_fields, parse_yaml, slice_lines, YamlNode};
use crate::settings::Settings;
use crate::types::Property;
use serde_yaml::Value;
use std::path::Path;

/// Frontmatter key that is always kept whole, even when it holds a list.
const TAGS_KEY: &str = "tags";

/// Extracts properties from notes through a host.
#[derive(Debug, Clone)]
pub struct MetaEditParser<H> {
    host: H,
}

impl<H: MetadataHost> MetaEditParser<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The host this parser reads from.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// One property per tag in the host's cache, content equal to the tag.
    pub fn tags_for_file(&self, document: &Path) -> Result<Vec<Property>> {
        let tags = self
            .host
            .file_cache(document)
            .and_then(|cache| cache.tags)
            .unwrap_or_default();

        Ok(tags.into_iter().map(|t| Property::tag(t.tag)).collect())
    }

    /// Frontmatter keys as properties.
    ///
    /// Strings, numbers, booleans, nulls, anything under `tags`, and lists that
    /// read as numbers (`[]`, `[5]`) are emitted whole. Other lists and
    /// mappings are flattened one level into `outer.inner` keys (list entries
    /// use their index); deeper values are passed through untouched.
    pub fn parse_frontmatter(&self, document: &Path) -> Result<Vec<Property>> {
        let Some(frontmatter) = self.host.file_cache(document).and_then(|c| c.frontmatter) else {
            return Ok(Vec::new());
        };

        let content = self.host.cached_read(document)?;
        let yaml = slice_lines(
            &content,
            frontmatter.position.start.line,
            frontmatter.position.end.line,
        );
        let parsed = parse_yaml(&yaml).map_err(|e| MetaEditError::InvalidFrontmatter {
            path: document.to_path_buf(),
            message: e.to_string(),
        })?;

        let props = flatten_frontmatter(&parsed);
        tracing::debug!(document = %document.display(), count = props.len(), "parsed frontmatter");
        Ok(props)
    }

    /// Inline `key:: value` fields as properties, in line order.
    ///
    /// A note without a cache entry yields nothing, like the other extractors.
    pub fn parse_inline_fields(&self, document: &Path) -> Result<Vec<Property>> {
        if self.host.file_cache(document).is_none() {
            return Ok(Vec::new());
        }

        let content = self.host.cached_read(document)?;
        let props: Vec<Property> = parse_inline_fields(&content)
            .into_iter()
            .map(Property::from)
            .collect();

        tracing::debug!(document = %document.display(), count = props.len(), "parsed inline fields");
        Ok(props)
    }

    /// Frontmatter properties followed by inline fields, without the keys the
    /// settings ignore.
    pub fn properties_for_file(&self, document: &Path, settings: &Settings) -> Result<Vec<Property>> {
        let mut props = self.parse_frontmatter(document)?;
        props.extend(self.parse_inline_fields(document)?);
        props.retain(|p| !settings.is_ignored(&p.key));
        Ok(props)
    }
}

/// Flatten a parsed frontmatter document into properties.
///
/// A top-level mapping yields one entry per key and a top-level list one
/// entry per index. Scalars yield nothing.
pub fn flatten_frontmatter(parsed: &Value) -> Vec<Property> {
    let Some(entries) = YamlNode::classify(parsed).entries() else {
        if !parsed.is_null() {
            tracing::warn!("frontmatter is not a mapping or list, ignoring it");
        }
        return Vec::new();
    };

    let mut props = Vec::new();

    for (key, value) in entries {
        let node = YamlNode::classify(value);

        if key == TAGS_KEY || node.is_scalar_like() {
            props.push(Property::yaml(key, value.clone()));
            continue;
        }

        // NaN has no entries and is dropped
        for (inner_key, inner_value) in node.entries().unwrap_or_default() {
            props.push(Property::yaml(format!("{key}.{inner_key}"), inner_value.clone()));
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FileCache, FrontmatterCache, Loc, Pos, TagCache};
    use crate::types::PropertyKind;
    use crate::vault::build_file_cache;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// A host backed by in-memory notes. Notes listed in `uncached` have text
    /// but no metadata cache entry.
    #[derive(Default)]
    struct MemoryHost {
        notes: HashMap<PathBuf, String>,
        uncached: Vec<PathBuf>,
    }

    impl MemoryHost {
        fn with_note(mut self, path: &str, content: &str) -> Self {
            self.notes.insert(PathBuf::from(path), content.to_string());
            self
        }

        fn without_cache(mut self, path: &str) -> Self {
            self.uncached.push(PathBuf::from(path));
            self
        }
    }

    impl MetadataHost for MemoryHost {
        fn file_cache(&self, document: &Path) -> Option<FileCache> {
            if self.uncached.iter().any(|p| p == document) {
                return None;
            }
            self.notes.get(document).map(|content| build_file_cache(content))
        }

        fn cached_read(&self, document: &Path) -> Result<String> {
            self.notes
                .get(document)
                .cloned()
                .ok_or_else(|| MetaEditError::NoteNotFound(document.to_path_buf()))
        }
    }

    /// A host whose cache is fixed, independent of the text.
    struct FixedHost {
        cache: FileCache,
        text: String,
    }

    impl MetadataHost for FixedHost {
        fn file_cache(&self, _document: &Path) -> Option<FileCache> {
            Some(self.cache.clone())
        }

        fn cached_read(&self, _document: &Path) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    fn parser_for(content: &str) -> MetaEditParser<MemoryHost> {
        MetaEditParser::new(MemoryHost::default().with_note("note.md", content))
    }

    fn note() -> &'static Path {
        Path::new("note.md")
    }

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn frontmatter(block: &str) -> Vec<Property> {
        parser_for(&format!("---\n{block}\n---\nbody")).parse_frontmatter(note()).unwrap()
    }

    #[test]
    fn test_uncached_note_yields_nothing() {
        let host = MemoryHost::default()
            .with_note("note.md", "---\ntitle: Hi\n---\n#tag\nStatus:: Done")
            .without_cache("note.md");
        let parser = MetaEditParser::new(host);

        assert!(parser.tags_for_file(note()).unwrap().is_empty());
        assert!(parser.parse_frontmatter(note()).unwrap().is_empty());
        assert!(parser.parse_inline_fields(note()).unwrap().is_empty());
        assert!(parser
            .properties_for_file(note(), &Settings::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unknown_note() {
        let parser = MetaEditParser::new(MemoryHost::default());
        assert!(parser.tags_for_file(note()).unwrap().is_empty());
        assert!(parser.parse_frontmatter(note()).unwrap().is_empty());
        assert!(parser.parse_inline_fields(note()).unwrap().is_empty());
    }

    #[test]
    fn test_tags_in_cache_order() {
        let props = parser_for("Some #a and #b").tags_for_file(note()).unwrap();
        assert_eq!(props, vec![Property::tag("#a"), Property::tag("#b")]);
        assert_eq!(props[0].content, Value::String("#a".to_string()));
    }

    #[test]
    fn test_no_tags() {
        assert!(parser_for("plain").tags_for_file(note()).unwrap().is_empty());
    }

    #[test]
    fn test_frontmatter_primitive() {
        assert_eq!(
            frontmatter("title: Hello"),
            vec![Property::yaml("title", yaml("Hello"))]
        );
    }

    #[test]
    fn test_frontmatter_scalars_kept_whole() {
        let props = frontmatter("count: 3\ndone: true\nempty:\nratio: 0.5");
        let keys: Vec<_> = props.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["count", "done", "empty", "ratio"]);
        assert_eq!(props[0].content, yaml("3"));
        assert_eq!(props[2].content, Value::Null);
        assert!(props.iter().all(|p| p.kind == PropertyKind::Yaml));
    }

    #[test]
    fn test_frontmatter_nested_group() {
        assert_eq!(
            frontmatter("meta:\n  author: Bob"),
            vec![Property::yaml("meta.author", yaml("Bob"))]
        );
    }

    #[test]
    fn test_frontmatter_nested_only_one_level() {
        let props = frontmatter("meta:\n  author:\n    name: Bob\n  year: 2020");
        assert_eq!(
            props,
            vec![
                Property::yaml("meta.author", yaml("name: Bob")),
                Property::yaml("meta.year", yaml("2020")),
            ]
        );
    }

    #[test]
    fn test_frontmatter_tags_kept_whole() {
        assert_eq!(
            frontmatter("tags: [a, b]"),
            vec![Property::yaml("tags", yaml("[a, b]"))]
        );
        assert_eq!(
            frontmatter("tags: foo"),
            vec![Property::yaml("tags", yaml("foo"))]
        );
    }

    #[test]
    fn test_frontmatter_other_lists_flatten_by_index() {
        assert_eq!(
            frontmatter("aliases:\n  - One\n  - Two"),
            vec![
                Property::yaml("aliases.0", yaml("One")),
                Property::yaml("aliases.1", yaml("Two")),
            ]
        );
    }

    #[test]
    fn test_frontmatter_numeric_like_lists_kept_whole() {
        assert_eq!(
            frontmatter("related: []\nscore: [5]"),
            vec![
                Property::yaml("related", yaml("[]")),
                Property::yaml("score", yaml("[5]")),
            ]
        );
    }

    #[test]
    fn test_frontmatter_empty_group_yields_nothing() {
        assert!(frontmatter("meta: {}").is_empty());
    }

    #[test]
    fn test_frontmatter_empty_block() {
        let props = parser_for("---\n---\nbody").parse_frontmatter(note()).unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_frontmatter_scalar_document() {
        assert!(frontmatter("just text").is_empty());
        assert!(frontmatter("42").is_empty());
    }

    #[test]
    fn test_frontmatter_list_document_keyed_by_index() {
        assert_eq!(
            frontmatter("- a\n- b: 1"),
            vec![
                Property::yaml("0", yaml("a")),
                Property::yaml("1.b", yaml("1")),
            ]
        );
    }

    #[test]
    fn test_frontmatter_float_edge_cases() {
        assert_eq!(
            frontmatter("skipped: .nan\nlimit: [.inf]\nfloor: [-.inf]\nscore: .inf"),
            vec![
                Property::yaml("limit", yaml("[.inf]")),
                Property::yaml("floor", yaml("[-.inf]")),
                Property::yaml("score", yaml(".inf")),
            ]
        );
        assert_eq!(frontmatter("tags: .nan").len(), 1);
    }

    #[test]
    fn test_frontmatter_invalid_yaml() {
        let result = parser_for("---\ninvalid: yaml: syntax:\n---\n").parse_frontmatter(note());
        assert!(matches!(result, Err(MetaEditError::InvalidFrontmatter { .. })));
    }

    #[test]
    fn test_frontmatter_uses_cached_line_range() {
        let host = FixedHost {
            cache: FileCache {
                tags: None,
                frontmatter: Some(FrontmatterCache {
                    position: Pos {
                        start: Loc { line: 1, col: 0, offset: 0 },
                        end: Loc { line: 2, col: 0, offset: 0 },
                    },
                }),
            },
            text: "title: skipped\nauthor: Ann\nstatus: skipped".to_string(),
        };
        let props = MetaEditParser::new(host).parse_frontmatter(note()).unwrap();
        assert_eq!(props, vec![Property::yaml("author", yaml("Ann"))]);
    }

    #[test]
    fn test_tags_from_fixed_cache() {
        let tag = |t: &str| TagCache {
            tag: t.to_string(),
            position: Pos::default(),
        };
        let host = FixedHost {
            cache: FileCache {
                tags: Some(vec![tag("#x"), tag("#y/z")]),
                frontmatter: None,
            },
            text: String::new(),
        };
        let props = MetaEditParser::new(host).tags_for_file(note()).unwrap();
        assert_eq!(props, vec![Property::tag("#x"), Property::tag("#y/z")]);
    }

    #[test]
    fn test_inline_fields() {
        let parser = parser_for("Status:: Done\nno field here\nFlag::\nOwner::  Ann ");
        assert_eq!(
            parser.parse_inline_fields(note()).unwrap(),
            vec![
                Property::dataview("Status", "Done"),
                Property::dataview("Flag", ""),
                Property::dataview("Owner", "Ann"),
            ]
        );
    }

    #[test]
    fn test_inline_fields_need_only_a_cache_entry() {
        let host = FixedHost {
            cache: FileCache::default(),
            text: "Status:: Done".to_string(),
        };
        let props = MetaEditParser::new(host).parse_inline_fields(note()).unwrap();
        assert_eq!(props, vec![Property::dataview("Status", "Done")]);
    }

    #[test]
    fn test_extractors_are_repeatable() {
        let parser = parser_for("---\ntitle: Hi\nmeta:\n  a: 1\n---\n#t\nk:: v");
        assert_eq!(parser.tags_for_file(note()).unwrap(), parser.tags_for_file(note()).unwrap());
        assert_eq!(
            parser.parse_frontmatter(note()).unwrap(),
            parser.parse_frontmatter(note()).unwrap()
        );
        assert_eq!(
            parser.parse_inline_fields(note()).unwrap(),
            parser.parse_inline_fields(note()).unwrap()
        );
    }

    #[test]
    fn test_properties_for_file_honours_ignored() {
        let parser = parser_for("---\ntitle: Hi\ncssclass: wide\n---\nStatus:: Done");
        let mut settings = Settings::default();
        settings.ignored_properties.properties = vec!["cssclass".to_string()];

        // ignoring is off until enabled
        let keys = |props: Vec<Property>| props.into_iter().map(|p| p.key).collect::<Vec<_>>();
        assert_eq!(
            keys(parser.properties_for_file(note(), &settings).unwrap()),
            vec!["title", "cssclass", "Status"]
        );

        settings.ignored_properties.enabled = true;
        assert_eq!(
            keys(parser.properties_for_file(note(), &settings).unwrap()),
            vec!["title", "Status"]
        );
    }
}
