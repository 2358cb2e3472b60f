//! The configuration snapshot and its setting groups.
//!
//! Responsibilities:
//! - Define `Config`, the immutable snapshot consumed by the compute modules.
//! - Provide compiled-in defaults through `Default` impls.
//! - Render a snapshot as the flat JSON document the loader reads.
//!
//! Does NOT handle:
//! - Merging file values over defaults (see `loader::overrides`).
//!
//! Invariants:
//! - `GatherConfig::default().total_feats_pt == num_tiles * tile_feats`.
//! - `Config::to_document()` uses the same keys the loader reads, so loading
//!   a rendered document reproduces the snapshot.

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::hex_address;
use super::regions::MemoryRegions;
use crate::constants::{
    DEFAULT_BULK_FEATS_GATHER, DEFAULT_DEBUG, DEFAULT_GEMM_ALIGNMENT, DEFAULT_GEMM_SIZE,
    DEFAULT_GEMM_WT_GROUP, DEFAULT_N_THREADS_GATHER, DEFAULT_NUM_PIVOTS, DEFAULT_NUM_THREADS,
    DEFAULT_NUM_TILES_GATHER, DEFAULT_OUTPUT_DIR, DEFAULT_SIZE_FEAT, DEFAULT_SIZE_INT,
    DEFAULT_SIZE_KEY, DEFAULT_SIZE_WEIGHT, DEFAULT_TILE_FEATS_GATHER, keys,
};

/// Fully resolved configuration for one process run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub threads: ThreadConfig,
    pub sizes: ElementSizes,
    pub regions: MemoryRegions,
    pub gemm: GemmConfig,
    pub gather: GatherConfig,
}

/// Runtime flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    /// Enables verbose tracing in the simulator phases.
    pub debug: bool,
    /// Directory simulator output is written to.
    pub output_dir: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debug: DEFAULT_DEBUG,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Virtual thread counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadConfig {
    /// Threads used by the map/sort phases (`NUM_THREADS`).
    pub num_threads: usize,
    /// Threads used by the gather simulation (`N_THREADS_GATHER`).
    pub gather_threads: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            num_threads: DEFAULT_NUM_THREADS,
            gather_threads: DEFAULT_N_THREADS_GATHER,
        }
    }
}

/// Element sizes in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSizes {
    pub key: usize,
    pub int: usize,
    pub weight: usize,
    pub feat: usize,
}

impl Default for ElementSizes {
    fn default() -> Self {
        Self {
            key: DEFAULT_SIZE_KEY,
            int: DEFAULT_SIZE_INT,
            weight: DEFAULT_SIZE_WEIGHT,
            feat: DEFAULT_SIZE_FEAT,
        }
    }
}

/// GEMM kernel parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GemmConfig {
    pub alignment: usize,
    /// Number of weights grouped per GEMM (`GEMM_WT_GROUP`).
    pub weight_group: usize,
    pub size: usize,
}

impl Default for GemmConfig {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_GEMM_ALIGNMENT,
            weight_group: DEFAULT_GEMM_WT_GROUP,
            size: DEFAULT_GEMM_SIZE,
        }
    }
}

/// Gather simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatherConfig {
    pub num_tiles: usize,
    pub tile_feats: usize,
    pub bulk_feats: usize,
    /// Features per point. Derived from `num_tiles * tile_feats` unless set explicitly.
    pub total_feats_pt: usize,
    pub num_pivots: usize,
}

impl GatherConfig {
    /// Features per point implied by the tile layout.
    ///
    /// Saturates instead of overflowing for absurd tile counts.
    pub fn derived_total_feats(&self) -> usize {
        self.num_tiles.saturating_mul(self.tile_feats)
    }
}

impl Default for GatherConfig {
    fn default() -> Self {
        let mut gather = Self {
            num_tiles: DEFAULT_NUM_TILES_GATHER,
            tile_feats: DEFAULT_TILE_FEATS_GATHER,
            bulk_feats: DEFAULT_BULK_FEATS_GATHER,
            total_feats_pt: 0,
            num_pivots: DEFAULT_NUM_PIVOTS,
        };
        gather.total_feats_pt = gather.derived_total_feats();
        gather
    }
}

/// Intermediate representation for rendering addresses inside `json!`.
#[derive(Serialize)]
struct Address(#[serde(with = "hex_address")] u64);

impl Config {
    /// Base address of the tile region; always equal to `I_BASE`.
    pub fn tile_base(&self) -> u64 {
        self.regions.tile_base()
    }

    /// Render the snapshot as a flat JSON object using the file's key names.
    ///
    /// Addresses are written as `0x` hex strings and `TOTAL_FEATS_PT` is
    /// always written explicitly.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();

        doc.insert(keys::DEBUG.into(), json!(self.runtime.debug));
        doc.insert(keys::OUTPUT_DIR.into(), json!(self.runtime.output_dir));

        doc.insert(keys::NUM_THREADS.into(), json!(self.threads.num_threads));
        doc.insert(keys::N_THREADS_GATHER.into(), json!(self.threads.gather_threads));

        doc.insert(keys::SIZE_KEY.into(), json!(self.sizes.key));
        doc.insert(keys::SIZE_INT.into(), json!(self.sizes.int));
        doc.insert(keys::SIZE_WEIGHT.into(), json!(self.sizes.weight));
        doc.insert(keys::SIZE_FEAT.into(), json!(self.sizes.feat));

        for (key, address) in keys::ADDRESS_KEYS.iter().zip(self.regions.bases()) {
            doc.insert((*key).into(), json!(Address(address)));
        }

        doc.insert(keys::GEMM_ALIGNMENT.into(), json!(self.gemm.alignment));
        doc.insert(keys::GEMM_WT_GROUP.into(), json!(self.gemm.weight_group));
        doc.insert(keys::GEMM_SIZE.into(), json!(self.gemm.size));

        doc.insert(keys::NUM_TILES.into(), json!(self.gather.num_tiles));
        doc.insert(keys::TILE_FEATS.into(), json!(self.gather.tile_feats));
        doc.insert(keys::BULK_FEATS.into(), json!(self.gather.bulk_feats));
        doc.insert(keys::TOTAL_FEATS_PT.into(), json!(self.gather.total_feats_pt));
        doc.insert(keys::NUM_PIVOTS.into(), json!(self.gather.num_pivots));

        Value::Object(doc)
    }
}
