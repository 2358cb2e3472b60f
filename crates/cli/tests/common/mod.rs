//! Shared test utilities for minuet-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a temporary config file location per test.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Tests always pass `--config-path`; the default location beside the test
//!   binary is never read.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `minuet-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `MINUET_CONFIG_PATH` is cleared to ensure no leakage from the host.
pub fn minuet_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("minuet-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("MINUET_CONFIG_PATH").env_remove("RUST_LOG");

    cmd
}

/// Returns a temp dir and the path of a (not yet created) config file inside it.
#[allow(dead_code)]
pub fn temp_config_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.json");
    (temp_dir, path)
}

/// Writes `contents` to a fresh temp config file.
#[allow(dead_code)]
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let (temp_dir, path) = temp_config_path();
    fs::write(&path, contents).expect("Failed to write config file");
    (temp_dir, path)
}
