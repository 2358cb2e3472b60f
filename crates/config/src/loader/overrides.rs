//! Merging document values over the compiled-in defaults.
//!
//! Responsibilities:
//! - Replace each default whose key is present in the document.
//! - Route address keys through hex-or-int coercion.
//! - Resolve `TOTAL_FEATS_PT` after the tile counts are final.
//!
//! Does NOT handle:
//! - Reading or parsing the file (see `document.rs`).
//!
//! Invariants:
//! - Absent scalar keys leave their field untouched and produce no warning.
//! - Every address key is coerced; an absent one keeps its default and
//!   records `AddressAbsent`.
//! - A present key with the wrong JSON type keeps the default and records
//!   exactly one warning for that key.
//! - Unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::address::coerce_address;
use super::error::ConfigWarning;
use crate::constants::keys;
use crate::types::Config;

/// Apply every recognised key of `doc` to `config`.
pub(crate) fn apply_document(
    doc: &Map<String, Value>,
    mut config: Config,
    warnings: &mut Vec<ConfigWarning>,
) -> Config {
    let mut merge = Merge { doc, warnings };

    merge.flag(keys::DEBUG, &mut config.runtime.debug);
    merge.text(keys::OUTPUT_DIR, &mut config.runtime.output_dir);

    merge.count(keys::NUM_THREADS, &mut config.threads.num_threads);
    merge.count(keys::N_THREADS_GATHER, &mut config.threads.gather_threads);

    merge.count(keys::SIZE_KEY, &mut config.sizes.key);
    merge.count(keys::SIZE_INT, &mut config.sizes.int);
    merge.count(keys::SIZE_WEIGHT, &mut config.sizes.weight);
    merge.count(keys::SIZE_FEAT, &mut config.sizes.feat);

    let regions = &mut config.regions;
    merge.address(keys::I_BASE, &mut regions.i_base);
    merge.address(keys::QK_BASE, &mut regions.qk_base);
    merge.address(keys::QI_BASE, &mut regions.qi_base);
    merge.address(keys::QO_BASE, &mut regions.qo_base);
    merge.address(keys::PIV_BASE, &mut regions.piv_base);
    merge.address(keys::KM_BASE, &mut regions.km_base);
    merge.address(keys::WO_BASE, &mut regions.wo_base);
    merge.address(keys::IV_BASE, &mut regions.iv_base);
    merge.address(keys::GM_BASE, &mut regions.gm_base);
    merge.address(keys::WV_BASE, &mut regions.wv_base);

    merge.count(keys::GEMM_ALIGNMENT, &mut config.gemm.alignment);
    merge.count(keys::GEMM_WT_GROUP, &mut config.gemm.weight_group);
    merge.count(keys::GEMM_SIZE, &mut config.gemm.size);

    let gather = &mut config.gather;
    merge.count(keys::NUM_TILES, &mut gather.num_tiles);
    merge.count(keys::TILE_FEATS, &mut gather.tile_feats);
    merge.count(keys::BULK_FEATS, &mut gather.bulk_feats);
    merge.count(keys::NUM_PIVOTS, &mut gather.num_pivots);

    // Derived from the overridden tile layout unless the file pins it.
    gather.total_feats_pt = gather.derived_total_feats();
    merge.count(keys::TOTAL_FEATS_PT, &mut gather.total_feats_pt);

    config
}

struct Merge<'a> {
    doc: &'a Map<String, Value>,
    warnings: &'a mut Vec<ConfigWarning>,
}

impl Merge<'_> {
    fn flag(&mut self, key: &str, slot: &mut bool) {
        self.scalar(key, slot, "a boolean");
    }

    fn text(&mut self, key: &str, slot: &mut String) {
        self.scalar(key, slot, "a string");
    }

    fn count(&mut self, key: &str, slot: &mut usize) {
        self.scalar(key, slot, "a non-negative integer");
    }

    fn scalar<T: DeserializeOwned>(&mut self, key: &str, slot: &mut T, expected: &'static str) {
        let Some(value) = self.doc.get(key) else {
            return;
        };

        match T::deserialize(value) {
            Ok(parsed) => *slot = parsed,
            Err(_) => self.warnings.push(ConfigWarning::TypeMismatch {
                field: key.to_string(),
                expected,
                value: value.to_string(),
            }),
        }
    }

    fn address(&mut self, key: &str, slot: &mut u64) {
        let (address, warning) = coerce_address(key, self.doc.get(key), *slot);
        *slot = address;
        self.warnings.extend(warning);
    }
}
