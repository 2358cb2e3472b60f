//! Configuration management for the Minuet simulation toolkit.
//!
//! This crate provides the compiled-in defaults for the GEMM, gather and
//! memory-region parameters, and a loader that overrides them from a JSON
//! file without ever failing startup.

pub mod constants;
mod global;
mod loader;
mod persistence;
pub mod types;

pub use global::{global, install};
pub use loader::{
    ConfigError, ConfigLoader, ConfigSource, ConfigWarning, LoadOutcome, coerce_address, load,
    parse_hex,
};
pub use persistence::write_config_file;
pub use types::{
    Config, ElementSizes, GatherConfig, GemmConfig, LegacyView, MemoryRegions, RuntimeConfig,
    TensorRegion, ThreadConfig, UnknownRegionName,
};
