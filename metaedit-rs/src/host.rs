//! The capability a host provides to the extractors.
//!
//! A host owns the notes. It answers two questions about a document: what its
//! metadata cache records (tags, frontmatter position), and what its raw text
//! is. [`crate::vault::Vault`] implements this over a directory on disk; tests
//! and embedders can supply their own.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A location in a document. Lines and columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Loc {
    pub line: usize,
    pub col: usize,
    /// Byte offset from the start of the document.
    pub offset: usize,
}

/// A span between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pos {
    pub start: Loc,
    pub end: Loc,
}

/// A tag recorded for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCache {
    /// The literal tag text, including `#`.
    pub tag: String,
    pub position: Pos,
}

/// Where the frontmatter block sits in a document.
///
/// `position.start.line` is the opening `---` line and `position.end.line`
/// the closing `---` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontmatterCache {
    pub position: Pos,
}

/// Cached metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileCache {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagCache>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<FrontmatterCache>,
}

/// Access to a host's metadata cache and document contents.
pub trait MetadataHost {
    /// Cached metadata for a document, or `None` if the host has no entry.
    fn file_cache(&self, document: &Path) -> Option<FileCache>;

    /// Full raw text of a document.
    fn cached_read(&self, document: &Path) -> Result<String>;
}

impl<H: MetadataHost + ?Sized> MetadataHost for &H {
    fn file_cache(&self, document: &Path) -> Option<FileCache> {
        (**self).file_cache(document)
    }

    fn cached_read(&self, document: &Path) -> Result<String> {
        (**self).cached_read(document)
    }
}
