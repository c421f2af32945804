//! Settings describing which property categories are active.
//!
//! The settings are owned by whatever hosts the editor; this module only
//! declares the shape, answers lookups, and loads/saves it as JSON or TOML.

use crate::error::{MetaEditError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a progress property is computed from the tasks in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    /// Total number of tasks.
    TaskTotal,
    /// Number of completed tasks.
    TaskComplete,
    /// Number of incomplete tasks.
    TaskIncomplete,
}

/// A property whose value tracks task progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProgressKind,
}

/// A property with a fixed list of suggested values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoProperty {
    pub name: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Whether edited values are single or multi-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Every property holds a single value.
    #[default]
    AllSingle,
    /// Every property holds a list of values.
    AllMulti,
    /// Only the properties in `multi_properties` hold lists.
    SomeMulti,
}

/// A category that can be switched on or off, with its member entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggled<T> {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "Vec::new")]
    pub properties: Vec<T>,
}

impl<T> Default for Toggled<T> {
    fn default() -> Self {
        Self {
            enabled: false,
            properties: Vec::new(),
        }
    }
}

impl<T> Toggled<T> {
    /// Entries of the category, or nothing when it is disabled.
    pub fn active(&self) -> &[T] {
        if self.enabled { &self.properties[..] } else { &[] }
    }
}

/// Edit mode together with the property names it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditModeSettings {
    #[serde(default)]
    pub mode: EditMode,
    #[serde(default)]
    pub multi_properties: Vec<String>,
    #[serde(default)]
    pub single_properties: Vec<String>,
}

/// Full settings record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub progress_properties: Toggled<ProgressProperty>,
    pub ignored_properties: Toggled<String>,
    pub auto_properties: Toggled<AutoProperty>,
    pub edit_mode: EditModeSettings,
}

impl Settings {
    /// Load settings from a file. A missing file yields the defaults.
    ///
    /// Files ending in `.toml` are read as TOML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings = if is_toml(path) {
            toml::from_str(&content).map_err(|e| settings_error(path, e))?
        } else {
            serde_json::from_str(&content).map_err(|e| settings_error(path, e))?
        };
        Ok(settings)
    }

    /// Write settings to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Vault-local settings path.
    pub fn vault_path(vault_root: &Path) -> PathBuf {
        vault_root.join(".metaedit").join("settings.json")
    }

    /// User-level settings path (`<config_dir>/metaedit/settings.json`).
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("metaedit").join("settings.json"))
    }

    /// Pick the settings file for a vault: the vault-local file if present,
    /// then the user-level file if present, else the vault-local path.
    pub fn default_path(vault_root: &Path) -> PathBuf {
        let local = Self::vault_path(vault_root);
        if local.exists() {
            return local;
        }
        match Self::user_path() {
            Some(user) if user.exists() => user,
            _ => local,
        }
    }

    /// Whether a property key should be hidden from editing.
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_properties.active().iter().any(|p| p == key)
    }

    /// Progress property definition for a name, if the category is enabled.
    pub fn progress_property(&self, name: &str) -> Option<&ProgressProperty> {
        self.progress_properties
            .active()
            .iter()
            .find(|p| p.name == name)
    }

    /// Auto property definition for a name, if the category is enabled.
    pub fn auto_property(&self, name: &str) -> Option<&AutoProperty> {
        self.auto_properties.active().iter().find(|p| p.name == name)
    }

    /// Whether a property is edited as a list of values.
    pub fn is_multi_value(&self, key: &str) -> bool {
        match self.edit_mode.mode {
            EditMode::AllSingle => false,
            EditMode::AllMulti => true,
            EditMode::SomeMulti => self.edit_mode.multi_properties.iter().any(|p| p == key),
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|e| e == "toml").unwrap_or(false)
}

fn settings_error(path: &Path, err: impl std::fmt::Display) -> MetaEditError {
    MetaEditError::Settings {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Settings {
        Settings {
            progress_properties: Toggled {
                enabled: true,
                properties: vec![ProgressProperty {
                    name: "done".to_string(),
                    kind: ProgressKind::TaskComplete,
                }],
            },
            ignored_properties: Toggled {
                enabled: true,
                properties: vec!["aliases".to_string()],
            },
            auto_properties: Toggled {
                enabled: false,
                properties: vec![AutoProperty {
                    name: "status".to_string(),
                    choices: vec!["todo".to_string(), "done".to_string()],
                }],
            },
            edit_mode: EditModeSettings {
                mode: EditMode::SomeMulti,
                multi_properties: vec!["authors".to_string()],
                single_properties: vec![],
            },
        }
    }

    #[test]
    fn test_defaults_disable_everything() {
        let settings = Settings::default();
        assert!(!settings.ignored_properties.enabled);
        assert!(settings.progress_properties.properties.is_empty());
        assert_eq!(settings.edit_mode.mode, EditMode::AllSingle);
        assert!(!settings.is_multi_value("anything"));
    }

    #[test]
    fn test_lookups_respect_enabled() {
        let settings = sample();
        assert!(settings.is_ignored("aliases"));
        assert!(!settings.is_ignored("title"));
        assert_eq!(
            settings.progress_property("done").map(|p| p.kind),
            Some(ProgressKind::TaskComplete)
        );
        // auto properties are disabled
        assert!(settings.auto_property("status").is_none());
    }

    #[test]
    fn test_edit_modes() {
        let mut settings = sample();
        assert!(settings.is_multi_value("authors"));
        assert!(!settings.is_multi_value("title"));

        settings.edit_mode.mode = EditMode::AllMulti;
        assert!(settings.is_multi_value("title"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        sample().save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        sample().save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"ignored_properties": {"enabled": true, "properties": ["cssclass"]}}"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.is_ignored("cssclass"));
        assert_eq!(settings.edit_mode, EditModeSettings::default());
    }

    #[test]
    fn test_invalid_json_is_settings_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(MetaEditError::Settings { .. })));
    }

    #[test]
    fn test_vault_path() {
        let path = Settings::vault_path(Path::new("/vault"));
        assert_eq!(path, PathBuf::from("/vault/.metaedit/settings.json"));
    }
}
