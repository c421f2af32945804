//! CLI command implementations.

pub mod args;
pub mod output;

pub mod properties;
pub mod settings;

pub use args::{Cli, Commands};
pub use output::Output;
