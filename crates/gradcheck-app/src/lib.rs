//! Use case orchestration for gradcheck.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod catalog;
mod config;
mod explain;
mod plan;
mod render;
mod report;

pub use audit::{AuditInput, AuditOutput, run_audit, status_exit_code};
pub use catalog::{CatalogInput, CatalogListing, run_catalog};
pub use config::resolve_for_root;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use plan::{PlanInput, PlanOutput, run_plan, to_renderable_plan};
pub use render::{render_markdown, render_plan_markdown};
pub use report::{parse_report_json, serialize_report, to_renderable};
