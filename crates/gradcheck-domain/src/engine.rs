use crate::model::{CatalogStore, CompletedCourses, RequirementBlock};
use crate::policy::AuditPolicy;
use crate::report::AuditOutcome;
use crate::strategies;
use gradcheck_types::{AuditReport, BlockStatus, CourseCode, StudentProfile, ids};
use std::collections::BTreeMap;

pub fn evaluate(
    profile: &StudentProfile,
    catalog: &CatalogStore,
    policy: &AuditPolicy,
) -> AuditOutcome {
    let completed = CompletedCourses::from_raw(&profile.courses_done);

    // Degree-wide credits: catalog credits of completed courses, independent of blocks.
    let mut credits_done: u32 = 0;
    let mut unrecognized_courses: Vec<CourseCode> = Vec::new();
    for code in completed.iter() {
        match catalog.course(code) {
            Some(course) => credits_done = credits_done.saturating_add(course.credits),
            None => unrecognized_courses.push(code.clone()),
        }
    }

    let blocks: BTreeMap<String, BlockStatus> = catalog
        .blocks
        .iter()
        .map(|(name, block)| (name.clone(), evaluate_block(block, &completed)))
        .collect();

    if !unrecognized_courses.is_empty() {
        tracing::debug!(
            count = unrecognized_courses.len(),
            "completed courses not found in catalog contribute no credits"
        );
    }

    AuditOutcome {
        report: AuditReport {
            catalog_year: profile.catalog_year.clone(),
            credits_done,
            credits_required: policy.min_total_credits,
            blocks,
        },
        unrecognized_courses,
    }
}

fn evaluate_block(block: &RequirementBlock, completed: &CompletedCourses) -> BlockStatus {
    let mut status = BlockStatus {
        credits_required: block.credits_required(),
        ..BlockStatus::default()
    };

    for req in &block.requirements {
        match strategies::first_match(req, completed) {
            Some(hit) => {
                tracing::debug!(
                    block = %block.name,
                    requirement = %req.name,
                    strategy = hit.strategy,
                    matched = %hit.matched,
                    "requirement satisfied"
                );
                status.completed.push(hit.descriptor);
                status.credits_done = status.credits_done.saturating_add(req.credits);
            }
            None => {
                tracing::debug!(
                    block = %block.name,
                    requirement = %req.name,
                    strategy = ids::STRATEGY_UNSATISFIED,
                    "requirement missing"
                );
                status.missing.push(req.name.clone());
            }
        }
    }

    status
}
