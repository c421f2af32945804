//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metaedit")]
#[command(author, version, about = "Extract note properties from an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to the vault (defaults to the current directory)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the tags recorded for a note
    #[command(name = "get-tags")]
    GetTags(NoteArgs),

    /// Get frontmatter properties of a note
    #[command(name = "get-frontmatter")]
    GetFrontmatter(NoteArgs),

    /// Get inline `key:: value` fields of a note
    #[command(name = "get-inline-fields")]
    GetInlineFields(NoteArgs),

    /// Get frontmatter and inline properties, honouring ignored properties
    #[command(name = "get-properties")]
    GetProperties(PropertiesArgs),

    /// Get properties for every note in the vault
    Scan(ScanArgs),

    /// Inspect or create the settings file
    Settings(SettingsArgs),
}

#[derive(Args, Debug)]
pub struct NoteArgs {
    /// Note path or name
    pub path: String,
}

#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// Note path or name
    pub path: String,

    /// Settings file (defaults to <vault>/.metaedit/settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Only scan notes matching this glob pattern
    #[arg(long)]
    pub glob: Option<String>,

    /// Settings file (defaults to <vault>/.metaedit/settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show {
        /// Settings file (defaults to <vault>/.metaedit/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Write a default settings file
    Init {
        /// Settings file (defaults to <vault>/.metaedit/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show how the settings treat one property
    Lookup {
        /// Property key
        key: String,

        /// Settings file (defaults to <vault>/.metaedit/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}
