//! Fuzz target for catalog document normalization.
//!
//! Goal: normalization should **never panic** on any input.
//! Text that is not JSON is an error; every JSON shape degrades to empty collections.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_documents
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = gradcheck_catalog::fuzz::normalize_course_document(text);
        let _ = gradcheck_catalog::fuzz::normalize_requirements_document(text);
    }
});
