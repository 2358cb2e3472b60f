//! `show` command: print the resolved snapshot.

use anyhow::Result;
use minuet_config::ConfigLoader;

use crate::error::ExitCode;
use crate::formatters::{OutputFormat, get_formatter};

pub fn run(loader: &ConfigLoader, legacy: bool, format: OutputFormat) -> Result<ExitCode> {
    let outcome = loader.load();
    outcome.report();

    let formatter = get_formatter(format);
    let output = if legacy {
        formatter.format_legacy(&outcome.config.legacy_view())?
    } else {
        formatter.format_config(&outcome.config)?
    };

    println!("{}", output);
    Ok(ExitCode::Success)
}
