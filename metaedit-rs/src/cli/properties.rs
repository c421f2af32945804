//! Property extraction commands.

use crate::cli::args::{NoteArgs, PropertiesArgs, ScanArgs};
use crate::cli::output::Output;
use crate::error::Result;
use crate::extract::MetaEditParser;
use crate::settings::Settings;
use crate::types::Property;
use crate::vault::Vault;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Properties of a single note.
#[derive(Debug, Serialize)]
pub struct PropertiesOutput {
    pub path: String,
    pub properties: Vec<Property>,
}

/// Properties across the vault.
#[derive(Debug, Serialize)]
pub struct ScanOutput {
    pub total: usize,
    pub notes: Vec<NoteProperties>,
}

/// One scanned note. Notes that failed to parse carry the error instead.
#[derive(Debug, Serialize)]
pub struct NoteProperties {
    pub path: String,
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn get_tags(vault: &Vault, args: &NoteArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let properties = MetaEditParser::new(vault).tags_for_file(&path)?;
    print_properties(&path, properties, output)
}

pub fn get_frontmatter(vault: &Vault, args: &NoteArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let properties = MetaEditParser::new(vault).parse_frontmatter(&path)?;
    print_properties(&path, properties, output)
}

pub fn get_inline_fields(vault: &Vault, args: &NoteArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let properties = MetaEditParser::new(vault).parse_inline_fields(&path)?;
    print_properties(&path, properties, output)
}

pub fn get_properties(vault: &Vault, args: &PropertiesArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let settings = load_settings(vault, args.settings.as_deref())?;
    let properties = MetaEditParser::new(vault).properties_for_file(&path, &settings)?;
    print_properties(&path, properties, output)
}

pub fn scan(vault: &Vault, args: &ScanArgs, output: &Output) -> Result<()> {
    let settings = load_settings(vault, args.settings.as_deref())?;
    let notes = match &args.glob {
        Some(pattern) => vault.list_notes_matching(pattern)?,
        None => vault.list_notes()?,
    };

    let parser = MetaEditParser::new(vault);
    let mut scanned = Vec::with_capacity(notes.len());

    for path in notes {
        let entry = match parser.properties_for_file(&path, &settings) {
            Ok(properties) => NoteProperties {
                path: display_path(&path),
                properties,
                error: None,
            },
            Err(e) => {
                tracing::warn!(note = %path.display(), error = %e, "skipping note");
                output.warn(&e.to_string());
                NoteProperties {
                    path: display_path(&path),
                    properties: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        scanned.push(entry);
    }

    output.print(&ScanOutput {
        total: scanned.len(),
        notes: scanned,
    })
}

/// Load settings from an explicit file or the vault's default location.
pub fn load_settings(vault: &Vault, explicit: Option<&Path>) -> Result<Settings> {
    let path = settings_path(vault, explicit);
    tracing::debug!(path = %path.display(), "loading settings");
    Settings::load(&path)
}

pub(crate) fn settings_path(vault: &Vault, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Settings::default_path(&vault.root))
}

fn print_properties(path: &Path, properties: Vec<Property>, output: &Output) -> Result<()> {
    output.print(&PropertiesOutput {
        path: display_path(path),
        properties,
    })
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
