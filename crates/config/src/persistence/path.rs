//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the default configuration file path beside the running executable.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Environment or builder overrides (see `loader`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::CONFIG_FILE_NAME;

/// Returns the default path to the configuration file.
///
/// The file lives next to the installed binary: `<exe dir>/config.json`.
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let exe = std::env::current_exe().context("Failed to determine the executable path")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(dir.join(CONFIG_FILE_NAME))
}
