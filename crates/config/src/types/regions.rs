//! Tensor memory regions and address classification.
//!
//! Responsibilities:
//! - Hold the base address of every traced tensor region.
//! - Classify a raw address into the region that contains it.
//! - Map regions to stable numeric ids used in memory traces.
//!
//! Does NOT handle:
//! - Parsing addresses from config files (see `loader::address`).
//! - Validating that bases ascend or do not overlap.
//!
//! Invariants:
//! - Each region spans `[base, next_base)`; a non-ascending pair yields an empty range.
//! - `WV` has no upper neighbour and spans `WV_REGION_SPAN` bytes.
//! - Region ids are stable: they are written into trace files.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::hex_address;
use crate::constants::{
    DEFAULT_GM_BASE, DEFAULT_I_BASE, DEFAULT_IV_BASE, DEFAULT_KM_BASE, DEFAULT_PIV_BASE,
    DEFAULT_QI_BASE, DEFAULT_QK_BASE, DEFAULT_QO_BASE, DEFAULT_WO_BASE, DEFAULT_WV_BASE,
    WV_REGION_SPAN,
};

/// Base addresses of the tensor regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryRegions {
    #[serde(with = "hex_address")]
    pub i_base: u64,
    #[serde(with = "hex_address")]
    pub qk_base: u64,
    #[serde(with = "hex_address")]
    pub qi_base: u64,
    #[serde(with = "hex_address")]
    pub qo_base: u64,
    #[serde(with = "hex_address")]
    pub piv_base: u64,
    #[serde(with = "hex_address")]
    pub km_base: u64,
    #[serde(with = "hex_address")]
    pub wo_base: u64,
    #[serde(with = "hex_address")]
    pub iv_base: u64,
    #[serde(with = "hex_address")]
    pub gm_base: u64,
    #[serde(with = "hex_address")]
    pub wv_base: u64,
}

impl Default for MemoryRegions {
    fn default() -> Self {
        Self {
            i_base: DEFAULT_I_BASE,
            qk_base: DEFAULT_QK_BASE,
            qi_base: DEFAULT_QI_BASE,
            qo_base: DEFAULT_QO_BASE,
            piv_base: DEFAULT_PIV_BASE,
            km_base: DEFAULT_KM_BASE,
            wo_base: DEFAULT_WO_BASE,
            iv_base: DEFAULT_IV_BASE,
            gm_base: DEFAULT_GM_BASE,
            wv_base: DEFAULT_WV_BASE,
        }
    }
}

impl MemoryRegions {
    /// The tile region aliases the input region.
    pub fn tile_base(&self) -> u64 {
        self.i_base
    }

    /// All bases in region order (`I` through `WV`).
    pub fn bases(&self) -> [u64; 10] {
        [
            self.i_base,
            self.qk_base,
            self.qi_base,
            self.qo_base,
            self.piv_base,
            self.km_base,
            self.wo_base,
            self.iv_base,
            self.gm_base,
            self.wv_base,
        ]
    }

    /// Classify `addr` into the region whose range contains it.
    ///
    /// Ranges are checked in region order and the first match wins, so an
    /// address never maps to `Tile`; callers treat `I` and `TILE` alike.
    pub fn region_of(&self, addr: u64) -> TensorRegion {
        let bounded = [
            (self.i_base, self.qk_base, TensorRegion::I),
            (self.qk_base, self.qi_base, TensorRegion::Qk),
            (self.qi_base, self.qo_base, TensorRegion::Qi),
            (self.qo_base, self.piv_base, TensorRegion::Qo),
            (self.piv_base, self.km_base, TensorRegion::Piv),
            (self.km_base, self.wo_base, TensorRegion::Km),
            (self.wo_base, self.iv_base, TensorRegion::Wc),
            (self.iv_base, self.gm_base, TensorRegion::Iv),
            (self.gm_base, self.wv_base, TensorRegion::Gm),
        ];

        if let Some((_, _, region)) = bounded
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&addr))
        {
            return *region;
        }

        let wv_end = self.wv_base.saturating_add(WV_REGION_SPAN);
        if (self.wv_base..wv_end).contains(&addr) {
            return TensorRegion::Wv;
        }

        TensorRegion::Unknown
    }

    /// Base address of `region`, or `None` for `Unknown`.
    pub fn base_of(&self, region: TensorRegion) -> Option<u64> {
        match region {
            TensorRegion::I | TensorRegion::Tile => Some(self.i_base),
            TensorRegion::Qk => Some(self.qk_base),
            TensorRegion::Qi => Some(self.qi_base),
            TensorRegion::Qo => Some(self.qo_base),
            TensorRegion::Piv => Some(self.piv_base),
            TensorRegion::Km => Some(self.km_base),
            TensorRegion::Wc => Some(self.wo_base),
            TensorRegion::Iv => Some(self.iv_base),
            TensorRegion::Gm => Some(self.gm_base),
            TensorRegion::Wv => Some(self.wv_base),
            TensorRegion::Unknown => None,
        }
    }
}

/// A traced tensor region.
///
/// The discriminant is the id written into memory traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TensorRegion {
    #[serde(rename = "I")]
    I = 0,
    #[serde(rename = "QK")]
    Qk = 1,
    #[serde(rename = "QI")]
    Qi = 2,
    #[serde(rename = "QO")]
    Qo = 3,
    #[serde(rename = "PIV")]
    Piv = 4,
    #[serde(rename = "KM")]
    Km = 5,
    /// Weight region starting at `WO_BASE`.
    #[serde(rename = "WC")]
    Wc = 6,
    #[serde(rename = "TILE")]
    Tile = 7,
    #[serde(rename = "IV")]
    Iv = 8,
    #[serde(rename = "GM")]
    Gm = 9,
    #[serde(rename = "WV")]
    Wv = 10,
    Unknown = 255,
}

impl TensorRegion {
    pub const ALL: [TensorRegion; 12] = [
        TensorRegion::I,
        TensorRegion::Qk,
        TensorRegion::Qi,
        TensorRegion::Qo,
        TensorRegion::Piv,
        TensorRegion::Km,
        TensorRegion::Wc,
        TensorRegion::Tile,
        TensorRegion::Iv,
        TensorRegion::Gm,
        TensorRegion::Wv,
        TensorRegion::Unknown,
    ];

    /// Trace id of the region.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a region by trace id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.id() == id)
    }

    /// Short name used in traces and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            TensorRegion::I => "I",
            TensorRegion::Qk => "QK",
            TensorRegion::Qi => "QI",
            TensorRegion::Qo => "QO",
            TensorRegion::Piv => "PIV",
            TensorRegion::Km => "KM",
            TensorRegion::Wc => "WC",
            TensorRegion::Tile => "TILE",
            TensorRegion::Iv => "IV",
            TensorRegion::Gm => "GM",
            TensorRegion::Wv => "WV",
            TensorRegion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TensorRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a region name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tensor region '{0}'")]
pub struct UnknownRegionName(pub String);

impl FromStr for TensorRegion {
    type Err = UnknownRegionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegionName(s.to_string()))
    }
}
