//! `path` command: print where the configuration is read from.

use anyhow::Result;
use minuet_config::ConfigLoader;

use crate::error::ExitCode;
use crate::formatters::{OutputFormat, PathReport, get_formatter};

pub fn run(loader: &ConfigLoader, format: OutputFormat) -> Result<ExitCode> {
    let (path, warning) = loader.resolve_path();
    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    let report = PathReport {
        exists: path.is_file(),
        path: path.display().to_string(),
    };
    println!("{}", get_formatter(format).format_path(&report)?);
    Ok(ExitCode::Success)
}
