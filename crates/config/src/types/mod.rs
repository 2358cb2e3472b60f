//! Configuration type definitions for the Minuet toolkit.
//!
//! Responsibilities:
//! - Define the immutable configuration snapshot and its setting groups.
//! - Define the tensor memory-region map and address lookup.
//! - Provide the legacy-name compatibility view.
//! - Render a snapshot back into the flat JSON document format.
//!
//! Does NOT handle:
//! - Loading configuration from files or environment variables (see `loader` module).
//! - Writing configuration files to disk (see `persistence` module).
//!
//! Invariants:
//! - `TILE_BASE` is not stored; it is always derived from `I_BASE`.
//! - Default values come from `constants.rs`, never from literals in this module.
//! - Addresses serialize as lowercase `0x` hex strings.

mod legacy;
mod regions;
mod snapshot;

pub use legacy::LegacyView;
pub use regions::{MemoryRegions, TensorRegion, UnknownRegionName};
pub use snapshot::{Config, ElementSizes, GatherConfig, GemmConfig, RuntimeConfig, ThreadConfig};

/// Module for serializing addresses as `0x` hex strings.
pub(crate) mod hex_address {
    use serde::Serializer;

    pub fn serialize<S>(address: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:#x}", address))
    }
}
