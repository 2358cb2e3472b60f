//! Compatibility view exposing the historical setting names.
//!
//! Older trace scripts read `NUM_TILES`, `TILE_FEATS`, `BULK_FEATS`,
//! `N_THREADS`, `TOTAL_FEATS_PT` and `TILE_BASE` directly. The snapshot keeps
//! one canonical field per value; this view copies them under the old names.

use serde::Serialize;

use super::hex_address;
use super::snapshot::Config;

/// Legacy-named copies of the gather settings and the tile base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LegacyView {
    pub num_tiles: usize,
    pub tile_feats: usize,
    pub bulk_feats: usize,
    pub n_threads: usize,
    pub total_feats_pt: usize,
    #[serde(with = "hex_address")]
    pub tile_base: u64,
}

impl Config {
    /// Build the legacy-named view of this snapshot.
    pub fn legacy_view(&self) -> LegacyView {
        LegacyView {
            num_tiles: self.gather.num_tiles,
            tile_feats: self.gather.tile_feats,
            bulk_feats: self.gather.bulk_feats,
            n_threads: self.threads.gather_threads,
            total_feats_pt: self.gather.total_feats_pt,
            tile_base: self.tile_base(),
        }
    }
}
