//! Catalog adapters: turn loosely structured JSON documents into the canonical
//! model consumed by `gradcheck-domain`.
//!
//! This crate is allowed to do filesystem IO. Normalization never fails; source
//! documents that cannot be read or parsed become warnings and empty collections.

#![forbid(unsafe_code)]

mod discover;
mod load;
mod sources;
mod text;

pub mod records;

pub use discover::discover_course_files;
pub use load::{
    Loaded, LoadedCatalog, SourceError, course_paths, load_catalog, load_courses,
    load_four_year_plan, load_policy, load_requirement_blocks, read_json,
};
pub use sources::{
    CatalogSources, DEFAULT_COURSE_GLOB, DEFAULT_DATA_DIR, DEFAULT_PLAN_FILE,
    DEFAULT_POLICIES_FILE, DEFAULT_REQUIREMENTS_FILE,
};

/// Fuzz-friendly API for exercising normalization without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a course document and normalize every record.
    ///
    /// Returns `Err(...)` only when the text is not JSON. **Never panics.**
    pub fn normalize_course_document(text: &str) -> anyhow::Result<usize> {
        let doc: serde_json::Value = serde_json::from_str(text)?;
        Ok(records::normalize_courses(&doc).len())
    }

    /// Parse arbitrary text as a degree requirements document.
    pub fn normalize_requirements_document(text: &str) -> anyhow::Result<usize> {
        let doc: serde_json::Value = serde_json::from_str(text)?;
        Ok(records::normalize_blocks(&doc).len())
    }

    /// Run the free-text heuristics (credits, code, name, prerequisites) on one string.
    pub fn text_heuristics(input: &str) -> (u32, Option<String>, String, Vec<String>) {
        (
            text::parse_credits_text(input),
            text::find_code_in_title(input),
            text::strip_code_prefix(input),
            text::split_prerequisites(input),
        )
    }
}

#[cfg(test)]
mod proptests {
    use super::records;
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            ".{0,24}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("code".to_string()),
                        Just("title".to_string()),
                        Just("name".to_string()),
                        Just("credits".to_string()),
                        Just("prereq".to_string()),
                        Just("semester_offered".to_string()),
                        Just("courses".to_string()),
                        Just("blocks".to_string()),
                        Just("requirements".to_string()),
                        "[a-z]{1,8}",
                    ],
                    inner,
                    0..6,
                )
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
            ]
        })
    }

    proptest! {
        #[test]
        fn normalizers_accept_any_json(doc in arb_json()) {
            let courses = records::normalize_courses(&doc);
            for course in &courses {
                prop_assert!(!course.code.is_empty());
            }
            let _ = records::normalize_blocks(&doc);
            let _ = records::normalize_policy(&doc);
            let _ = records::normalize_plan(&doc);
            let _ = records::normalize_requirement(&doc);
        }

        #[test]
        fn text_heuristics_accept_any_string(s in ".{0,64}") {
            let (_credits, code, _name, prereqs) = super::fuzz::text_heuristics(&s);
            if let Some(code) = code {
                prop_assert_eq!(code.clone(), code.to_uppercase());
            }
            for clause in prereqs {
                prop_assert!(!clause.is_empty());
            }
        }

        #[test]
        fn whole_credit_phrases_parse_exactly(n in 0u32..200) {
            let (credits, _, _, _) = super::fuzz::text_heuristics(&format!("{n} credits"));
            prop_assert_eq!(credits, n);
        }
    }
}
