//! Fuzz target for single course records built from structured input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_course_record
//! ```

#![no_main]

use arbitrary::Arbitrary;
use gradcheck_catalog::records;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value, json};

/// Structured input shaped like a scraped catalog entry.
#[derive(Arbitrary, Debug)]
struct CourseInput {
    code: Option<String>,
    title: Option<String>,
    name: Option<String>,
    credits_text: Option<String>,
    credits_number: Option<f64>,
    prereq: Option<String>,
    semesters: Vec<String>,
    key_hint: Option<String>,
}

fuzz_target!(|input: CourseInput| {
    if input.semesters.len() > 20 {
        return;
    }

    let mut record = Map::new();
    if let Some(code) = input.code {
        record.insert("code".to_string(), Value::String(code));
    }
    if let Some(title) = input.title {
        record.insert("title".to_string(), Value::String(title));
    }
    if let Some(name) = input.name {
        record.insert("name".to_string(), Value::String(name));
    }
    match (input.credits_text, input.credits_number) {
        (Some(text), _) => {
            record.insert("credits".to_string(), Value::String(text));
        }
        (None, Some(n)) => {
            record.insert("credits".to_string(), json!(n));
        }
        (None, None) => {}
    }
    if let Some(prereq) = input.prereq {
        record.insert("prereq".to_string(), Value::String(prereq));
    }
    record.insert("semester_offered".to_string(), json!(input.semesters));

    if let Some(course) = records::normalize_course(&record, input.key_hint.as_deref()) {
        assert!(!course.code.is_empty(), "normalized course has a blank code");
        assert_eq!(course.code.as_str(), course.code.as_str().to_uppercase());
    }
});
