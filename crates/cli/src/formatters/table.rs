//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format reports as tab-separated key/value tables.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use minuet_config::{Config, LegacyView};
use serde_json::Value;

use crate::formatters::{CheckReport, Formatter, PathReport, RegionReport};

const MISSING_VALUE: &str = "N/A";

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(key_value_table(&config.to_document()))
    }

    fn format_legacy(&self, view: &LegacyView) -> Result<String> {
        Ok(key_value_table(&serde_json::to_value(view)?))
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        let missing = if report.missing_addresses.is_empty() {
            "none".to_string()
        } else {
            report.missing_addresses.join(", ")
        };
        let mut output = format!(
            "Path:\t{}\nSource:\t{}\nDocument:\t{}\nMissing addresses:\t{}\n",
            report.path,
            report.source,
            report.document.as_deref().unwrap_or("ok"),
            missing,
        );
        if report.warnings.is_empty() {
            output.push_str("Warnings:\tnone");
        } else {
            output.push_str(&format!("Warnings ({}):", report.warnings.len()));
            for warning in &report.warnings {
                output.push_str(&format!("\n  - {}", warning));
            }
        }
        Ok(output)
    }

    fn format_region(&self, report: &RegionReport) -> Result<String> {
        Ok(format!(
            "Address:\t{}\nRegion:\t{}\nId:\t{}\nBase:\t{}\nOffset:\t{}",
            report.address,
            report.region,
            report.id,
            report.base.as_deref().unwrap_or(MISSING_VALUE),
            report.offset.as_deref().unwrap_or(MISSING_VALUE),
        ))
    }

    fn format_path(&self, report: &PathReport) -> Result<String> {
        let state = if report.exists { "exists" } else { "missing" };
        Ok(format!("{}\t({})", report.path, state))
    }
}

/// Render a flat JSON object as `KEY<TAB>VALUE` lines.
fn key_value_table(value: &Value) -> String {
    let Some(map) = value.as_object() else {
        return format_json_value(value);
    };

    let mut output = String::from("KEY\tVALUE");
    for (key, value) in map {
        output.push_str(&format!("\n{}\t{}", key, format_json_value(value)));
    }
    output
}

/// Render a scalar without JSON quoting.
fn format_json_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => MISSING_VALUE.to_string(),
        other => other.to_string(),
    }
}
