//! Writing config documents to disk.
//!
//! Responsibilities:
//! - Render a snapshot with `Config::to_document` and save it atomically.
//!
//! Does NOT handle:
//! - Deciding whether an existing file may be replaced (the caller checks).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename); the target is never half-written.

use anyhow::{Context, Result};
use std::path::Path;

use crate::types::Config;

/// Atomically write `config` as a JSON document at `path`.
///
/// Parent directories are created as needed and an existing file is replaced.
pub fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let temp_path = path.with_extension("tmp");
    let mut content = serde_json::to_string_pretty(&config.to_document())?;
    content.push('\n');
    std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

    std::fs::rename(&temp_path, path).context("Failed to rename temporary config file")?;

    tracing::debug!(path = %path.display(), "Config written atomically");

    Ok(())
}
