//! `check` command: load the file and list every warning.
//!
//! Missing address keys are listed but never fail `--strict`.

use anyhow::Result;
use minuet_config::ConfigLoader;

use crate::error::ExitCode;
use crate::formatters::{CheckReport, OutputFormat, get_formatter};

pub fn run(loader: &ConfigLoader, strict: bool, format: OutputFormat) -> Result<ExitCode> {
    let outcome = loader.load();
    let report = CheckReport::from(&outcome);

    println!("{}", get_formatter(format).format_check(&report)?);

    if strict && report.has_issues() {
        tracing::debug!(warnings = report.warnings.len(), "Strict check failed");
        return Ok(ExitCode::ValidationError);
    }
    Ok(ExitCode::Success)
}
