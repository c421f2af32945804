//! metaedit CLI entry point.

use clap::Parser;
use metaedit::cli::args::{Cli, Commands};
use metaedit::cli::output::Output;
use metaedit::cli::{properties, settings};
use metaedit::error::{exit_code, MetaEditError};
use metaedit::vault::Vault;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked from `-v`/`-q`.
fn init_tracing(cli: &Cli) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metaedit={}", cli.log_level())));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> Result<(), MetaEditError> {
    let vault_path = cli.vault.clone().unwrap_or_else(|| PathBuf::from("."));
    let vault = Vault::new(vault_path)?;

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::GetTags(args) => properties::get_tags(&vault, args, &output),
        Commands::GetFrontmatter(args) => properties::get_frontmatter(&vault, args, &output),
        Commands::GetInlineFields(args) => properties::get_inline_fields(&vault, args, &output),
        Commands::GetProperties(args) => properties::get_properties(&vault, args, &output),
        Commands::Scan(args) => properties::scan(&vault, args, &output),
        Commands::Settings(args) => settings::run(&vault, &args.command, &output),
    }
}
