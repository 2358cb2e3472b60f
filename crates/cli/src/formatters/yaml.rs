//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format all reports as YAML.
//! - Human-friendly configuration export format.
//! - Render configurations with the config file's key names.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use minuet_config::{Config, LegacyView};

use crate::formatters::{CheckReport, Formatter, PathReport, RegionReport};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(serde_yaml::to_string(&config.to_document())?)
    }

    fn format_legacy(&self, view: &LegacyView) -> Result<String> {
        Ok(serde_yaml::to_string(view)?)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }

    fn format_region(&self, report: &RegionReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }

    fn format_path(&self, report: &PathReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}
