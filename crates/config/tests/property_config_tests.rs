//! Property-based tests for configuration loading.
//!
//! These tests write randomly generated documents to disk and verify the
//! laws the loader guarantees for every input, using randomly generated
//! subsets of keys to catch edge cases unit tests might miss.
//!
//! Test coverage:
//! - Override law: present keys change, absent keys keep their defaults
//! - Alias law: the legacy view mirrors the canonical fields
//! - Derived law: TOTAL_FEATS_PT is the tile product unless pinned
//! - Address coercion: hex strings and integers parse, malformed hex falls back

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use tempfile::TempDir;

use minuet_config::{Config, ConfigWarning, coerce_address, load};

/// An address together with one of its two accepted JSON spellings.
fn address_strategy() -> impl Strategy<Value = (u64, Value)> {
    prop_oneof![
        any::<u64>().prop_map(|a| (a, json!(format!("{:#x}", a)))),
        any::<u64>().prop_map(|a| (a, json!(a))),
    ]
}

/// Small positive counts, as used for threads, sizes and tile layouts.
fn count_strategy() -> impl Strategy<Value = usize> {
    1usize..=4096usize
}

/// Optional overrides for a representative subset of keys.
#[derive(Debug, Clone)]
struct Overrides {
    debug: Option<bool>,
    output_dir: Option<String>,
    num_threads: Option<usize>,
    size_feat: Option<usize>,
    gemm_size: Option<usize>,
    i_base: Option<(u64, Value)>,
    wv_base: Option<(u64, Value)>,
    num_tiles: Option<usize>,
    tile_feats: Option<usize>,
    total_feats_pt: Option<usize>,
    gather_threads: Option<usize>,
}

fn overrides_strategy() -> impl Strategy<Value = Overrides> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{1,8}/".prop_map(String::from)),
        proptest::option::of(count_strategy()),
        proptest::option::of(count_strategy()),
        proptest::option::of(count_strategy()),
        proptest::option::of(address_strategy()),
        proptest::option::of(address_strategy()),
        proptest::option::of(count_strategy()),
        proptest::option::of(count_strategy()),
        proptest::option::of(count_strategy()),
        proptest::option::of(count_strategy()),
    )
        .prop_map(
            |(
                debug,
                output_dir,
                num_threads,
                size_feat,
                gemm_size,
                i_base,
                wv_base,
                num_tiles,
                tile_feats,
                total_feats_pt,
                gather_threads,
            )| Overrides {
                debug,
                output_dir,
                num_threads,
                size_feat,
                gemm_size,
                i_base,
                wv_base,
                num_tiles,
                tile_feats,
                total_feats_pt,
                gather_threads,
            },
        )
}

impl Overrides {
    fn to_document(&self) -> Value {
        let mut doc = Map::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                doc.insert(key.to_string(), value);
            }
        };

        put("debug", self.debug.map(Value::from));
        put("output_dir", self.output_dir.clone().map(Value::from));
        put("NUM_THREADS", self.num_threads.map(Value::from));
        put("SIZE_FEAT", self.size_feat.map(Value::from));
        put("GEMM_SIZE", self.gemm_size.map(Value::from));
        put("I_BASE", self.i_base.as_ref().map(|(_, raw)| raw.clone()));
        put("WV_BASE", self.wv_base.as_ref().map(|(_, raw)| raw.clone()));
        put("NUM_TILES", self.num_tiles.map(Value::from));
        put("TILE_FEATS", self.tile_feats.map(Value::from));
        put("TOTAL_FEATS_PT", self.total_feats_pt.map(Value::from));
        put("N_THREADS_GATHER", self.gather_threads.map(Value::from));

        Value::Object(doc)
    }

    /// The snapshot these overrides should produce.
    fn expected(&self) -> Config {
        let mut config = Config::default();
        if let Some(debug) = self.debug {
            config.runtime.debug = debug;
        }
        if let Some(dir) = &self.output_dir {
            config.runtime.output_dir = dir.clone();
        }
        if let Some(n) = self.num_threads {
            config.threads.num_threads = n;
        }
        if let Some(n) = self.size_feat {
            config.sizes.feat = n;
        }
        if let Some(n) = self.gemm_size {
            config.gemm.size = n;
        }
        if let Some((address, _)) = self.i_base {
            config.regions.i_base = address;
        }
        if let Some((address, _)) = self.wv_base {
            config.regions.wv_base = address;
        }
        if let Some(n) = self.num_tiles {
            config.gather.num_tiles = n;
        }
        if let Some(n) = self.tile_feats {
            config.gather.tile_feats = n;
        }
        if let Some(n) = self.gather_threads {
            config.threads.gather_threads = n;
        }
        config.gather.total_feats_pt = self
            .total_feats_pt
            .unwrap_or(config.gather.num_tiles * config.gather.tile_feats);
        config
    }
}

fn load_document(doc: &Value) -> minuet_config::LoadOutcome {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, doc.to_string()).expect("Failed to write config");
    load(&path)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Present keys are overridden, everything else keeps its default.
    #[test]
    fn test_subset_overrides_exactly_named_keys(overrides in overrides_strategy()) {
        let outcome = load_document(&overrides.to_document());

        prop_assert!(outcome.is_clean(), "unexpected warnings: {:?}", outcome.warnings);
        prop_assert_eq!(outcome.config, overrides.expected());
    }

    /// The legacy view mirrors the canonical fields for every input.
    #[test]
    fn test_legacy_aliases_mirror_canonical_fields(overrides in overrides_strategy()) {
        let config = load_document(&overrides.to_document()).into_config();
        let legacy = config.legacy_view();

        prop_assert_eq!(legacy.num_tiles, config.gather.num_tiles);
        prop_assert_eq!(legacy.tile_feats, config.gather.tile_feats);
        prop_assert_eq!(legacy.bulk_feats, config.gather.bulk_feats);
        prop_assert_eq!(legacy.n_threads, config.threads.gather_threads);
        prop_assert_eq!(legacy.total_feats_pt, config.gather.total_feats_pt);
        prop_assert_eq!(legacy.tile_base, config.regions.i_base);
        prop_assert_eq!(config.tile_base(), config.regions.i_base);
    }

    /// Without TOTAL_FEATS_PT the value is the (possibly overridden) tile product.
    #[test]
    fn test_total_feats_derived_unless_pinned(
        num_tiles in count_strategy(),
        tile_feats in count_strategy(),
        pinned in proptest::option::of(count_strategy()),
    ) {
        let mut doc = json!({"NUM_TILES": num_tiles, "TILE_FEATS": tile_feats});
        if let Some(total) = pinned {
            doc["TOTAL_FEATS_PT"] = json!(total);
        }

        let config = load_document(&doc).into_config();

        prop_assert_eq!(
            config.gather.total_feats_pt,
            pinned.unwrap_or(num_tiles * tile_feats)
        );
    }

    /// Loading the same document twice yields identical outcomes.
    #[test]
    fn test_loading_is_idempotent(overrides in overrides_strategy()) {
        let doc = overrides.to_document();
        prop_assert_eq!(load_document(&doc), load_document(&doc));
    }

    /// Hex strings and integers coerce to the same address.
    #[test]
    fn test_address_spellings_agree(address in any::<u64>(), default in any::<u64>()) {
        let (from_hex, hex_warning) =
            coerce_address("I_BASE", Some(&json!(format!("{:#x}", address))), default);
        let (from_int, int_warning) = coerce_address("I_BASE", Some(&json!(address)), default);

        prop_assert_eq!(from_hex, address);
        prop_assert_eq!(from_int, address);
        prop_assert!(hex_warning.is_none());
        prop_assert!(int_warning.is_none());
    }

    /// Malformed hex never panics and always yields the default.
    #[test]
    fn test_malformed_hex_falls_back(suffix in "[g-zG-Z_ -]{1,12}", default in any::<u64>()) {
        let raw = format!("0x{}", suffix);
        let (address, warning) = coerce_address("KM_BASE", Some(&json!(raw)), default);

        prop_assert_eq!(address, default);
        let is_malformed = matches!(warning, Some(ConfigWarning::MalformedAddress { .. }));
        prop_assert!(is_malformed);
    }
}
