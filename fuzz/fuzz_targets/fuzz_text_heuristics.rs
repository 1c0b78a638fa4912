//! Fuzz target for the free-text heuristics: credit phrases, title codes and
//! prerequisite splitting.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_text_heuristics
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let (_credits, code, _name, prereqs) = gradcheck_catalog::fuzz::text_heuristics(text);

        if let Some(code) = code {
            assert_eq!(code, code.to_uppercase(), "codes are uppercased");
        }
        assert!(
            prereqs.iter().all(|p| !p.is_empty()),
            "empty prerequisite clause from {text:?}"
        );
    }
});
