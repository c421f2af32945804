//! Error types and exit codes for metaedit.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const AMBIGUOUS_RESOLUTION: i32 = 4;
    pub const INVALID_FRONTMATTER: i32 = 5;
}

/// Main error type for metaedit operations.
#[derive(Error, Debug)]
pub enum MetaEditError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Ambiguous resolution: {count} notes match '{query}'")]
    AmbiguousResolution {
        query: String,
        count: usize,
        matches: Vec<PathBuf>,
    },

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Settings error in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl MetaEditError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MetaEditError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            MetaEditError::AmbiguousResolution { .. } => exit_code::AMBIGUOUS_RESOLUTION,
            MetaEditError::InvalidFrontmatter { .. } => exit_code::INVALID_FRONTMATTER,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for metaedit operations.
pub type Result<T> = std::result::Result<T, MetaEditError>;
