//! Centralized constants for the Minuet configuration workspace.
//!
//! This module contains the compiled-in defaults and the JSON-facing key
//! names, so that the loader, the document renderer and the CLI agree on
//! a single spelling.

// =============================================================================
// Config File Location
// =============================================================================

/// Fixed file name looked up next to the running executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MINUET_CONFIG_PATH";

// =============================================================================
// Runtime Flags
// =============================================================================

pub const DEFAULT_DEBUG: bool = false;

/// Default directory for simulator output (traces, dumps).
pub const DEFAULT_OUTPUT_DIR: &str = "out/";

// =============================================================================
// Thread Counts
// =============================================================================

/// Number of virtual threads used by the general (map/sort) phases.
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Number of virtual threads used by the gather simulation.
pub const DEFAULT_N_THREADS_GATHER: usize = 1;

// =============================================================================
// Element Sizes (bytes)
// =============================================================================

pub const DEFAULT_SIZE_KEY: usize = 4;
pub const DEFAULT_SIZE_INT: usize = 4;
pub const DEFAULT_SIZE_WEIGHT: usize = 4;
pub const DEFAULT_SIZE_FEAT: usize = 2;

// =============================================================================
// Tensor Memory Region Bases
// =============================================================================

pub const DEFAULT_I_BASE: u64 = 0x1000_0000;
pub const DEFAULT_QK_BASE: u64 = 0x2000_0000;
pub const DEFAULT_QI_BASE: u64 = 0x3000_0000;
pub const DEFAULT_QO_BASE: u64 = 0x4000_0000;
pub const DEFAULT_PIV_BASE: u64 = 0x5000_0000;
pub const DEFAULT_KM_BASE: u64 = 0x6000_0000;
pub const DEFAULT_WO_BASE: u64 = 0x8000_0000;
pub const DEFAULT_IV_BASE: u64 = 0x1_0000_0000;
pub const DEFAULT_GM_BASE: u64 = 0x8_0000_0000;
pub const DEFAULT_WV_BASE: u64 = 0xF_0000_0000;

/// Extent of the WV region, the only region without an upper neighbour.
pub const WV_REGION_SPAN: u64 = 2 << 32;

// =============================================================================
// GEMM Parameters
// =============================================================================

pub const DEFAULT_GEMM_ALIGNMENT: usize = 4;
pub const DEFAULT_GEMM_WT_GROUP: usize = 2;
pub const DEFAULT_GEMM_SIZE: usize = 4;

// =============================================================================
// Gather Parameters
// =============================================================================

pub const DEFAULT_NUM_TILES_GATHER: usize = 4;
pub const DEFAULT_TILE_FEATS_GATHER: usize = 16;
pub const DEFAULT_BULK_FEATS_GATHER: usize = 4;
pub const DEFAULT_NUM_PIVOTS: usize = 2;

/// JSON-facing key names.
///
/// The gather fields keep their historical short names in the file
/// (`NUM_TILES` rather than `NUM_TILES_GATHER`).
pub mod keys {
    pub const DEBUG: &str = "debug";
    pub const OUTPUT_DIR: &str = "output_dir";

    pub const NUM_THREADS: &str = "NUM_THREADS";
    pub const N_THREADS_GATHER: &str = "N_THREADS_GATHER";

    pub const SIZE_KEY: &str = "SIZE_KEY";
    pub const SIZE_INT: &str = "SIZE_INT";
    pub const SIZE_WEIGHT: &str = "SIZE_WEIGHT";
    pub const SIZE_FEAT: &str = "SIZE_FEAT";

    pub const I_BASE: &str = "I_BASE";
    pub const QK_BASE: &str = "QK_BASE";
    pub const QI_BASE: &str = "QI_BASE";
    pub const QO_BASE: &str = "QO_BASE";
    pub const PIV_BASE: &str = "PIV_BASE";
    pub const KM_BASE: &str = "KM_BASE";
    pub const WO_BASE: &str = "WO_BASE";
    pub const IV_BASE: &str = "IV_BASE";
    pub const GM_BASE: &str = "GM_BASE";
    pub const WV_BASE: &str = "WV_BASE";

    pub const GEMM_ALIGNMENT: &str = "GEMM_ALIGNMENT";
    pub const GEMM_WT_GROUP: &str = "GEMM_WT_GROUP";
    pub const GEMM_SIZE: &str = "GEMM_SIZE";

    pub const NUM_TILES: &str = "NUM_TILES";
    pub const TILE_FEATS: &str = "TILE_FEATS";
    pub const BULK_FEATS: &str = "BULK_FEATS";
    pub const TOTAL_FEATS_PT: &str = "TOTAL_FEATS_PT";
    pub const NUM_PIVOTS: &str = "NUM_PIVOTS";

    /// Every address key, in region order.
    pub const ADDRESS_KEYS: [&str; 10] = [
        I_BASE, QK_BASE, QI_BASE, QO_BASE, PIV_BASE, KM_BASE, WO_BASE, IV_BASE, GM_BASE, WV_BASE,
    ];
}
