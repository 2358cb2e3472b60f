//! Process-wide configuration snapshot.
//!
//! Responsibilities:
//! - Build the snapshot once, on first access, from the environment-resolved path.
//! - Let an entrypoint install an explicitly loaded snapshot before first access.
//!
//! Invariants:
//! - The snapshot is written at most once and never changes afterwards.
//! - Building it never fails; warnings are reported through `tracing`.

use std::sync::OnceLock;

use crate::loader::ConfigLoader;
use crate::types::Config;

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// The process-wide snapshot, loaded on first call.
///
/// The first call resolves the path via `MINUET_CONFIG_PATH` or the
/// executable directory, loads it, and logs the outcome.
pub fn global() -> &'static Config {
    GLOBAL.get_or_init(|| {
        let outcome = ConfigLoader::new().from_env().load();
        outcome.report();
        outcome.into_config()
    })
}

/// Install `config` as the process-wide snapshot.
///
/// Returns the config back if a snapshot was already installed or loaded.
pub fn install(config: Config) -> Result<(), Config> {
    GLOBAL.set(config)
}
