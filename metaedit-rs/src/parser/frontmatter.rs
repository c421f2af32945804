//! YAML frontmatter location and parsing.

use crate::host::{Loc, Pos};
use serde_yaml::Value;

const DELIMITER: &str = "---";

/// Locate the frontmatter block.
///
/// The first line must be `---` and a later line must close the block with
/// `---`. The returned span starts at the opening delimiter and ends just after
/// the closing one, with 0-indexed lines.
pub fn locate_frontmatter(content: &str) -> Option<Pos> {
    let mut offset = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let text = line.trim_end_matches(['\n', '\r']);

        if index == 0 {
            if text != DELIMITER {
                return None;
            }
        } else if text == DELIMITER {
            return Some(Pos {
                start: Loc::default(),
                end: Loc {
                    line: index,
                    col: DELIMITER.len(),
                    offset: offset + DELIMITER.len(),
                },
            });
        }

        offset += line.len();
    }

    None
}

/// Take lines `[start, end)` of `content`, split on `\n` and re-joined.
///
/// The range is trusted as given; an empty or inverted range yields "".
pub fn slice_lines(content: &str, start: usize, end: usize) -> String {
    content
        .split('\n')
        .skip(start)
        .take(end.saturating_sub(start))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a YAML string into a value. An empty document parses as null.
pub fn parse_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
