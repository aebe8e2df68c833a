//! Fuzz target for canonical document JSON parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pantrack::ir::io_json::from_json_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = from_json_str(text);
    }
});
