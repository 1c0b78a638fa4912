//! Markdown rendering for audit reports and advising plans.
//!
//! Renderers take plain view models so they stay independent of the report DTOs.

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::{render_markdown, render_plan_markdown};
pub use model::{
    RenderableAudit, RenderableBlock, RenderablePlanRow, RenderablePlanTerm, RenderableStatus,
};
