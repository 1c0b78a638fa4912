//! Render use cases: Markdown from in-memory reports and plans.

use gradcheck_render::{RenderableAudit, RenderablePlanTerm};

pub fn render_markdown(audit: &RenderableAudit) -> String {
    gradcheck_render::render_markdown(audit)
}

pub fn render_plan_markdown(terms: &[RenderablePlanTerm]) -> String {
    gradcheck_render::render_plan_markdown(terms)
}
