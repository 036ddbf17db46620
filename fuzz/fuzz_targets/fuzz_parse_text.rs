//! Fuzz target for the batch driver over whole inputs.
//!
//! Goal: classifying arbitrary text, rules included, should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse_text
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = depline_repo::fuzz::parse_text(text);
    }
});
