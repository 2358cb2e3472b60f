//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all reports as pretty-printed JSON.
//! - Render configurations with the config file's key names.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use minuet_config::{Config, LegacyView};

use crate::formatters::{CheckReport, Formatter, PathReport, RegionReport};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(&config.to_document())?)
    }

    fn format_legacy(&self, view: &LegacyView) -> Result<String> {
        Ok(serde_json::to_string_pretty(view)?)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_region(&self, report: &RegionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_path(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
