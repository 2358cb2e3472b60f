//! Configuration file locations and writing.
//!
//! Responsibilities:
//! - Resolve the default configuration file path.
//! - Write a snapshot back to disk as a config document.
//!
//! Does NOT handle:
//! - Reading or merging configuration (see `loader`).
//!
//! Invariants:
//! - Writes are atomic (using rename).

mod path;
mod write;

pub use write::write_config_file;

// Internal re-exports for use by loader module
pub(crate) use path::default_config_path;
