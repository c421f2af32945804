//! A vault of markdown notes on disk, acting as a metadata host.

use crate::error::{MetaEditError, Result};
use crate::host::{FileCache, FrontmatterCache, MetadataHost};
use crate::parser::{locate_frontmatter, parse_yaml, scan_tags, slice_lines};
use glob::glob;
use std::path::{Path, PathBuf};

/// Represents a vault rooted at a directory.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Create a new vault instance.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(MetaEditError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add .md extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Read the raw text of a note.
    pub fn read_note(&self, relative_path: &Path) -> Result<String> {
        if !self.note_exists(relative_path) {
            return Err(MetaEditError::NoteNotFound(relative_path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(self.note_path(relative_path))?)
    }

    /// List all markdown files in the vault, skipping hidden paths.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        self.list_notes_matching("**/*.md")
    }

    /// List notes matching a glob pattern relative to the vault root,
    /// skipping hidden paths.
    pub fn list_notes_matching(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let mut notes = self.glob_notes(pattern)?;
        notes.retain(|relative| !is_hidden(relative));
        Ok(notes)
    }

    fn glob_notes(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = self.root.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if path.is_file() && path.extension().map(|e| e == "md").unwrap_or(false) {
                        if let Ok(relative) = path.strip_prefix(&self.root) {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "glob error, skipping entry");
                }
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Resolve a note name to a path.
    ///
    /// Tries the exact path, then a case-insensitive match on file name or on
    /// a frontmatter alias.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);
        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let query_lower = query.trim().to_lowercase();
        let mut matches: Vec<PathBuf> = Vec::new();

        for note_path in self.list_notes()? {
            let name = note_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("");

            if name.to_lowercase() == query_lower || self.has_alias(&note_path, &query_lower) {
                matches.push(note_path);
            }
        }

        match matches.len() {
            0 => Err(MetaEditError::NoteNotFound(PathBuf::from(query))),
            1 => Ok(matches.remove(0)),
            _ => Err(MetaEditError::AmbiguousResolution {
                query: query.to_string(),
                count: matches.len(),
                matches,
            }),
        }
    }

    /// Whether a note lists `alias_lower` under its frontmatter `aliases`.
    fn has_alias(&self, note_path: &Path, alias_lower: &str) -> bool {
        let Ok(content) = self.read_note(note_path) else {
            return false;
        };
        let Some(pos) = locate_frontmatter(&content) else {
            return false;
        };
        let Ok(fm) = parse_yaml(&slice_lines(&content, pos.start.line, pos.end.line)) else {
            return false;
        };

        fm.get("aliases")
            .and_then(|aliases| aliases.as_sequence())
            .map(|aliases| {
                aliases
                    .iter()
                    .filter_map(|a| a.as_str())
                    .any(|a| a.to_lowercase() == alias_lower)
            })
            .unwrap_or(false)
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}

/// Build the metadata cache record for a note's text.
pub fn build_file_cache(content: &str) -> FileCache {
    let tags = scan_tags(content);
    FileCache {
        tags: (!tags.is_empty()).then_some(tags),
        frontmatter: locate_frontmatter(content).map(|position| FrontmatterCache { position }),
    }
}

impl MetadataHost for Vault {
    fn file_cache(&self, document: &Path) -> Option<FileCache> {
        match self.read_note(document) {
            Ok(content) => Some(build_file_cache(&content)),
            Err(e) => {
                tracing::debug!(document = %document.display(), error = %e, "no cache entry");
                None
            }
        }
    }

    fn cached_read(&self, document: &Path) -> Result<String> {
        self.read_note(document)
    }
}
