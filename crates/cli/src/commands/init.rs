//! `init` command: write the compiled-in defaults as a config document.

use anyhow::Result;
use minuet_config::{Config, ConfigLoader, write_config_file};

use crate::error::{CliError, ExitCode};

pub fn run(loader: &ConfigLoader, force: bool) -> Result<ExitCode> {
    let (path, warning) = loader.resolve_path();
    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    if path.exists() && !force {
        return Err(CliError::ConfigExists(path).into());
    }

    write_config_file(&path, &Config::default())?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote default configuration to {}", path.display());
    Ok(ExitCode::Success)
}
