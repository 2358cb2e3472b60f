//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test loading documents from disk, including missing and malformed files.
//! - Test the documented override scenarios end to end.
//! - Test config path resolution and environment precedence.
//!
//! Does NOT handle:
//! - Per-key merge rules (tested in overrides.rs).
//! - Address coercion details (tested in address.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `content` as `config.json` inside `dir` and return its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, content).expect("write test config");
    path
}
