//! Settings commands.

use crate::cli::args::SettingsCommands;
use crate::cli::output::Output;
use crate::cli::properties::{load_settings, settings_path};
use crate::error::Result;
use crate::settings::{AutoProperty, ProgressProperty, Settings};
use crate::vault::Vault;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub path: String,
    pub message: String,
}

/// How the settings treat one property key.
#[derive(Debug, Serialize)]
pub struct LookupResponse<'a> {
    pub key: &'a str,
    pub ignored: bool,
    pub multi_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<&'a ProgressProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<&'a AutoProperty>,
}

pub fn run(vault: &Vault, command: &SettingsCommands, output: &Output) -> Result<()> {
    match command {
        SettingsCommands::Show { settings } => show(vault, settings.as_deref(), output),
        SettingsCommands::Init { settings, force } => init(vault, settings.as_deref(), *force, output),
        SettingsCommands::Lookup { key, settings } => lookup(vault, key, settings.as_deref(), output),
    }
}

fn show(vault: &Vault, explicit: Option<&Path>, output: &Output) -> Result<()> {
    let path = settings_path(vault, explicit);
    if !path.exists() {
        output.info(&format!("No settings at {}, showing defaults", path.display()));
    }
    output.print(&Settings::load(&path)?)
}

fn init(vault: &Vault, explicit: Option<&Path>, force: bool, output: &Output) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Settings::vault_path(&vault.root),
    };

    let message = if path.exists() && !force {
        "Settings file already exists (use --force to overwrite)"
    } else {
        Settings::default().save(&path)?;
        tracing::info!(path = %path.display(), "wrote default settings");
        "Wrote default settings"
    };

    output.print(&InitResponse {
        path: path.to_string_lossy().to_string(),
        message: message.to_string(),
    })
}

fn lookup(vault: &Vault, key: &str, explicit: Option<&Path>, output: &Output) -> Result<()> {
    let settings = load_settings(vault, explicit)?;
    output.print(&LookupResponse {
        key,
        ignored: settings.is_ignored(key),
        multi_value: settings.is_multi_value(key),
        progress: settings.progress_property(key),
        auto: settings.auto_property(key),
    })
}
