//! Embeddable degree audits.
//!
//! Re-exports the pieces a host program needs to audit a student without the CLI:
//! normalize catalog documents, build a [`CatalogStore`], then call [`evaluate`].
//!
//! ```
//! use gradcheck::{AuditPolicy, CatalogStore, StudentProfile, evaluate, records};
//! use serde_json::json;
//!
//! let mut store = CatalogStore::default();
//! for course in records::normalize_courses(&json!([
//!     {"title": "CSCI 111: Computer Science I", "credits": "3 credits"}
//! ])) {
//!     store.insert_course(course);
//! }
//! for block in records::normalize_blocks(&json!({
//!     "blocks": {"Core": {"requirements": [{"name": "CSCI 111", "credits": 3}]}}
//! }))
//! .into_values()
//! {
//!     store.insert_block(block);
//! }
//!
//! let profile = StudentProfile::new("2024-2025", vec!["csci 111".to_string()]);
//! let outcome = evaluate(&profile, &store, &AuditPolicy::with_min_total_credits(3));
//! assert_eq!(outcome.report.credits_done, 3);
//! assert!(outcome.report.blocks["Core"].is_complete());
//! ```

#![forbid(unsafe_code)]

pub use gradcheck_catalog::{
    CatalogSources, LoadedCatalog, SourceError, load_catalog, load_four_year_plan, records,
};
pub use gradcheck_domain::evaluate;
pub use gradcheck_domain::fingerprint::catalog_fingerprint;
pub use gradcheck_domain::model::{
    CatalogStore, CompletedCourses, Course, PlanRow, PlanTerm, Requirement, RequirementBlock,
    Term,
};
pub use gradcheck_domain::policy::{AuditPolicy, DEFAULT_MIN_TOTAL_CREDITS};
pub use gradcheck_domain::report::AuditOutcome;
pub use gradcheck_types::{
    AuditReport, AuditStatus, BlockStatus, CourseCode, StudentProfile, explain, ids,
};
