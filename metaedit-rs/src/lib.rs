//! metaedit - extract editable properties from Obsidian-style notes.
//!
//! # Overview
//!
//! A note carries metadata in three places, and each has an extractor on
//! [`MetaEditParser`]:
//! - tags recorded in the host's metadata cache ([`MetaEditParser::tags_for_file`])
//! - YAML frontmatter, flattened one level ([`MetaEditParser::parse_frontmatter`])
//! - inline `key:: value` fields ([`MetaEditParser::parse_inline_fields`])
//!
//! Every extractor returns a list of [`Property`] values. The parser reads
//! through a [`MetadataHost`]; [`Vault`] is the host for a directory of notes.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use metaedit::{MetaEditParser, Settings, Vault};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let parser = MetaEditParser::new(&vault);
//! let settings = Settings::load(&Settings::default_path(&vault.root)).unwrap();
//!
//! let note = vault.resolve_note("My Note").unwrap();
//! for prop in parser.properties_for_file(&note, &settings).unwrap() {
//!     println!("{} ({}) = {:?}", prop.key, prop.kind.as_str(), prop.content);
//! }
//! println!("Tags: {:?}", parser.tags_for_file(Path::new("My Note.md")).unwrap());
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod host;
pub mod parser;
pub mod settings;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use error::{MetaEditError, Result};
pub use extract::MetaEditParser;
pub use host::{FileCache, MetadataHost};
pub use settings::Settings;
pub use types::*;
pub use vault::Vault;
