//! Property-based tests for the engine.
//!
//! These tests use proptest to verify invariants around:
//! - every requirement landing in exactly one of completed/missing
//! - block credit totals matching the satisfied requirements
//! - repeatable output for identical input

use crate::engine::evaluate;
use crate::model::{CatalogStore, CompletedCourses, Course, Requirement, RequirementBlock};
use crate::strategies;
use crate::policy::AuditPolicy;
use gradcheck_types::{CourseCode, StudentProfile};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_prefix() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CSCI".to_string()),
        Just("MATH".to_string()),
        Just("MUS".to_string()),
        Just("THEA".to_string()),
        Just("WRIT".to_string()),
    ]
}

/// Course codes drawn from a small space so that collisions are common.
fn arb_code() -> impl Strategy<Value = String> {
    (arb_prefix(), 100u32..110).prop_map(|(p, n)| format!("{p} {n}"))
}

/// Codes as a student might type them: any casing, stray whitespace.
fn arb_raw_code() -> impl Strategy<Value = String> {
    (arb_code(), any::<bool>(), any::<bool>()).prop_map(|(code, lower, pad)| {
        let code = if lower { code.to_lowercase() } else { code };
        if pad { format!("  {code} ") } else { code }
    })
}

fn arb_requirement() -> impl Strategy<Value = Requirement> {
    (
        prop_oneof![arb_code(), Just("Fine Arts".to_string()), Just("Unnamed".to_string())],
        0u32..6,
        prop::option::of(prop::collection::vec(arb_raw_code(), 0..3)),
        prop::option::of(prop::collection::vec(arb_prefix(), 0..3)),
    )
        .prop_map(|(name, credits, options, allowed_prefixes)| Requirement {
            name,
            credits,
            options,
            allowed_prefixes,
            ..Requirement::default()
        })
}

fn arb_catalog() -> impl Strategy<Value = CatalogStore> {
    (
        prop::collection::vec((arb_code(), 0u32..6), 0..12),
        prop::collection::vec(
            ("[A-Z][a-z]{2,8}", prop::collection::vec(arb_requirement(), 0..8)),
            0..5,
        ),
    )
        .prop_map(|(courses, blocks)| {
            let mut store = CatalogStore::default();
            for (code, credits) in courses {
                store.insert_course(Course {
                    code: CourseCode::new(&code),
                    name: code,
                    credits,
                    ..Course::default()
                });
            }
            for (name, requirements) in blocks {
                store.insert_block(RequirementBlock { name, requirements });
            }
            store
        })
}

fn arb_profile() -> impl Strategy<Value = StudentProfile> {
    prop::collection::vec(arb_raw_code(), 0..10)
        .prop_map(|done| StudentProfile::new("2024-2025", done))
}

proptest! {
    #[test]
    fn every_requirement_is_completed_or_missing_exactly_once(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let report = evaluate(&profile, &catalog, &AuditPolicy::default()).report;

        prop_assert_eq!(report.blocks.len(), catalog.blocks.len());
        for (name, block) in &catalog.blocks {
            let status = &report.blocks[name];
            prop_assert_eq!(
                status.completed.len() + status.missing.len(),
                block.requirements.len()
            );
        }
    }

    #[test]
    fn block_credits_done_sums_satisfied_requirements(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let report = evaluate(&profile, &catalog, &AuditPolicy::default()).report;
        let completed = CompletedCourses::from_raw(&profile.courses_done);

        for (name, block) in &catalog.blocks {
            let status = &report.blocks[name];
            let satisfied: Vec<&Requirement> = block
                .requirements
                .iter()
                .filter(|r| strategies::first_match(r, &completed).is_some())
                .collect();

            prop_assert_eq!(status.completed.len(), satisfied.len());
            for (descriptor, req) in status.completed.iter().zip(&satisfied) {
                prop_assert!(descriptor.starts_with(&req.name));
            }
            let expected: u32 = satisfied.iter().map(|r| r.credits).sum();
            prop_assert_eq!(status.credits_done, expected);
            prop_assert_eq!(status.credits_required, block.credits_required());
            prop_assert!(status.credits_done <= status.credits_required);
        }
    }

    #[test]
    fn identical_inputs_serialize_identically(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let a = serde_json::to_string(&evaluate(&profile, &catalog, &AuditPolicy::default()).report)
            .expect("serialize");
        let b = serde_json::to_string(&evaluate(&profile, &catalog, &AuditPolicy::default()).report)
            .expect("serialize");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn top_level_credits_ignore_unknown_codes(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let outcome = evaluate(&profile, &catalog, &AuditPolicy::default());
        let expected: u32 = profile
            .courses_done
            .iter()
            .map(CourseCode::new)
            .collect::<std::collections::BTreeSet<_>>()
            .iter()
            .filter_map(|c| catalog.course(c))
            .map(|c| c.credits)
            .sum();
        prop_assert_eq!(outcome.report.credits_done, expected);
        for code in &outcome.unrecognized_courses {
            prop_assert!(catalog.course(code).is_none());
        }
    }
}
