//! Code span detection, so tags inside code are not recorded.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Opening or closing fence: ``` or ~~~ at the start of a line
static FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(`{3,}|~{3,})").unwrap());

// Inline code on a single line. Double-backtick spans may contain single backticks.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``(?:[^`]|`[^`])*``|`[^`\n]+`").unwrap());

struct OpenFence {
    marker: char,
    len: usize,
    start: usize,
}

/// Byte ranges of fenced code blocks and inline code spans, in document order.
///
/// A fence that is never closed runs to the end of the document.
pub fn code_spans(content: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<OpenFence> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_end = offset + line.len();

        match &open {
            Some(fence) => {
                let trimmed = line.trim_end();
                if trimmed.len() >= fence.len && trimmed.chars().all(|c| c == fence.marker) {
                    spans.push(fence.start..offset + trimmed.len());
                    open = None;
                }
            }
            None => {
                if let Some(m) = FENCE.find(line) {
                    open = Some(OpenFence {
                        marker: m.as_str().chars().next().unwrap_or('`'),
                        len: m.len(),
                        start: offset,
                    });
                } else {
                    spans.extend(
                        INLINE_CODE
                            .find_iter(line)
                            .map(|m| offset + m.start()..offset + m.end()),
                    );
                }
            }
        }

        offset = line_end;
    }

    if let Some(fence) = open {
        spans.push(fence.start..content.len());
    }

    spans
}

/// Check if a byte offset falls inside any span.
pub fn in_code(offset: usize, spans: &[Range<usize>]) -> bool {
    spans.iter().any(|span| span.contains(&offset))
}
