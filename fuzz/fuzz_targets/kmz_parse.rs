//! Fuzz target for KMZ archive parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the KMZ archive reader,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pantrack::ir::io_kmz::from_kmz_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_kmz_slice(data);
});
