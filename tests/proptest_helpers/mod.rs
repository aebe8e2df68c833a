#![allow(dead_code)]

use pantrack::ir::LonLat;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_lonlat() -> impl Strategy<Value = LonLat> {
    (-180.0f64..180.0, -90.0f64..90.0).prop_map(|(lon, lat)| LonLat::new(lon, lat))
}

pub fn arb_path(min: usize, max: usize) -> impl Strategy<Value = Vec<LonLat>> {
    prop::collection::vec(arb_lonlat(), min..=max)
}

/// Free-text CSV label: no commas, never numeric, and no `l` so it can
/// never look like a `lat`/`lon` header.
pub fn arb_label() -> impl Strategy<Value = String> {
    "[a-km-z][a-km-z ]{0,11}"
}

/// Formats a coordinate value so it reads back exactly.
pub fn fmt_coord(value: f64) -> String {
    format!("{value:?}")
}
