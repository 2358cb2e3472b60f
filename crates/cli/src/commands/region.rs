//! `region` command: classify an address against the configured regions.

use anyhow::Result;
use minuet_config::{ConfigLoader, parse_hex};

use crate::error::{CliError, ExitCode};
use crate::formatters::{OutputFormat, RegionReport, get_formatter};

pub fn run(loader: &ConfigLoader, address: &str, format: OutputFormat) -> Result<ExitCode> {
    let addr = parse_address_arg(address)?;

    let outcome = loader.load();
    outcome.report();

    let report = RegionReport::new(&outcome.config.regions, addr);
    println!("{}", get_formatter(format).format_region(&report)?);
    Ok(ExitCode::Success)
}

/// Accept `0x`-prefixed hex or a plain decimal integer.
fn parse_address_arg(raw: &str) -> Result<u64, CliError> {
    let trimmed = raw.trim();
    let parsed = if trimmed.starts_with("0x") {
        parse_hex(trimmed)
    } else {
        trimmed.parse().ok()
    };
    parsed.ok_or_else(|| CliError::InvalidAddress(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_arg() {
        assert_eq!(parse_address_arg("0x20000010").unwrap(), 0x2000_0010);
        assert_eq!(parse_address_arg(" 4096 ").unwrap(), 4096);
        assert!(parse_address_arg("0xnope").is_err());
        assert!(parse_address_arg("-5").is_err());
        assert!(parse_address_arg("").is_err());
    }
}
