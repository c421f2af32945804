//! Tag scanning (#tag and #tag/subtag) for building a note's metadata cache.

use crate::host::{Loc, Pos, TagCache};
use crate::parser::code_span::{code_spans, in_code};
use crate::parser::frontmatter::locate_frontmatter;
use regex::Regex;
use std::sync::LazyLock;

// A tag is # followed by word characters, hyphens and slashes.
// It must not be preceded by a word character, & (HTML entity) or another #.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|[^\w&#])#([\w/-]+)").unwrap());

/// Scan the body of a note for tags, in document order.
///
/// Tags inside the frontmatter block, code, or wikilinks are skipped, as are
/// purely numeric ones like `#123`.
pub fn scan_tags(content: &str) -> Vec<TagCache> {
    let spans = code_spans(content);
    let body_start = locate_frontmatter(content)
        .map(|pos| pos.end.offset)
        .unwrap_or(0);
    let mut tags = Vec::new();

    for cap in TAG.captures_iter(content) {
        let Some(name) = cap.get(1) else { continue };

        // The # sits just before the captured name
        let start = name.start() - 1;
        let end = name.end();

        if start < body_start || in_code(start, &spans) || is_in_wikilink(content, start) {
            continue;
        }
        if name.as_str().chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        tags.push(TagCache {
            tag: format!("#{}", name.as_str()),
            position: Pos {
                start: loc_at(content, start),
                end: loc_at(content, end),
            },
        });
    }

    tags
}

/// Convert a byte offset into a 0-indexed line/column location.
fn loc_at(content: &str, offset: usize) -> Loc {
    let before = &content[..offset];
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    Loc {
        line: before.matches('\n').count(),
        col: offset - line_start,
        offset,
    }
}

/// Check if a position is between `[[` and `]]`.
fn is_in_wikilink(content: &str, pos: usize) -> bool {
    let before = &content[..pos];
    let after = &content[pos..];

    let opened_after_close = match (before.rfind("[["), before.rfind("]]")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    };

    opened_after_close && after.contains("]]")
}
