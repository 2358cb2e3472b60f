//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the config loader shared by every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - Blank `--config-path` values are ignored so the default location applies.

use anyhow::Result;
use minuet_config::ConfigLoader;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let format = OutputFormat::from_str(&cli.output)?;
    let loader = config_loader(&cli);

    match cli.command {
        Commands::Show { legacy } => commands::show::run(&loader, legacy, format),
        Commands::Check { strict } => commands::check::run(&loader, strict, format),
        Commands::Path => commands::path::run(&loader, format),
        Commands::Region { address } => commands::region::run(&loader, &address, format),
        Commands::Init { force } => commands::init::run(&loader, force),
    }
}

fn config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new().from_env();

    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader
}
