//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: Table, JSON and YAML.
//! - Implement the `Formatter` trait for each report the commands produce.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Addresses are always rendered as lowercase `0x` hex.

use anyhow::Result;
use minuet_config::{Config, ConfigSource, LegacyView, LoadOutcome, MemoryRegions, TensorRegion};
use serde::Serialize;

mod json;
mod table;
mod yaml;

pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, yaml",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the full configuration snapshot.
    fn format_config(&self, config: &Config) -> Result<String>;

    /// Format the legacy alias view.
    fn format_legacy(&self, view: &LegacyView) -> Result<String>;

    /// Format a load check.
    fn format_check(&self, report: &CheckReport) -> Result<String>;

    /// Format an address classification.
    fn format_region(&self, report: &RegionReport) -> Result<String>;

    /// Format the resolved config path.
    fn format_path(&self, report: &PathReport) -> Result<String>;
}

/// Result of `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub path: String,
    /// `file` when the document was merged, `defaults` when it was unusable.
    pub source: &'static str,
    /// Why the whole document was discarded, if it was.
    pub document: Option<String>,
    /// Per-key and path problems.
    pub warnings: Vec<String>,
    /// Address keys absent from the document; their defaults apply.
    pub missing_addresses: Vec<String>,
}

impl CheckReport {
    /// True when the document was discarded or a present key was rejected.
    pub fn has_issues(&self) -> bool {
        self.document.is_some() || !self.warnings.is_empty()
    }
}

impl From<&LoadOutcome> for CheckReport {
    fn from(outcome: &LoadOutcome) -> Self {
        let mut report = Self {
            path: outcome.path.display().to_string(),
            source: match outcome.source {
                ConfigSource::File => "file",
                ConfigSource::Defaults => "defaults",
            },
            document: None,
            warnings: Vec::new(),
            missing_addresses: Vec::new(),
        };

        for warning in &outcome.warnings {
            if warning.is_document_level() {
                report.document = Some(warning.to_string());
            } else if warning.is_absent_key()
                && let Some(field) = warning.field()
            {
                report.missing_addresses.push(field.to_string());
            } else {
                report.warnings.push(warning.to_string());
            }
        }
        report
    }
}

/// Result of `region`.
#[derive(Debug, Clone, Serialize)]
pub struct RegionReport {
    pub address: String,
    pub region: TensorRegion,
    pub id: u8,
    pub base: Option<String>,
    pub offset: Option<String>,
}

impl RegionReport {
    pub fn new(regions: &MemoryRegions, addr: u64) -> Self {
        let region = regions.region_of(addr);
        let base = regions.base_of(region);
        Self {
            address: format!("{:#x}", addr),
            region,
            id: region.id(),
            base: base.map(|b| format!("{:#x}", b)),
            offset: base
                .and_then(|b| addr.checked_sub(b))
                .map(|o| format!("{:#x}", o)),
        }
    }
}

/// Result of `path`.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub path: String,
    pub exists: bool,
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
