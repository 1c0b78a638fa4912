//! The `plan` use case: load the advising plan and fill in missing hours.

use camino::Utf8Path;
use gradcheck_domain::model::{CatalogStore, PlanTerm};
use gradcheck_render::{RenderablePlanRow, RenderablePlanTerm};
use gradcheck_settings::Overrides;
use gradcheck_types::{CourseCode, SourceWarning};

use crate::config::resolve_for_root;

#[derive(Clone, Debug)]
pub struct PlanInput<'a> {
    pub root: &'a Utf8Path,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct PlanOutput {
    pub terms: Vec<PlanTerm>,
    pub warnings: Vec<SourceWarning>,
}

/// Rows without hours take the catalog credits of the named course, when known.
pub fn run_plan(input: PlanInput<'_>) -> anyhow::Result<PlanOutput> {
    let resolved = resolve_for_root(input.root, input.config_text, input.overrides)?;
    let sources = &resolved.sources;

    let paths = gradcheck_catalog::course_paths(sources)?;
    let courses = gradcheck_catalog::load_courses(&paths);
    let plan = gradcheck_catalog::load_four_year_plan(&sources.plan_path());

    let mut terms = plan.value;
    fill_hours(&mut terms, &courses.value);

    let mut warnings = plan.warnings;
    warnings.extend(courses.warnings);

    tracing::info!(terms = terms.len(), "plan loaded");
    Ok(PlanOutput { terms, warnings })
}

fn fill_hours(terms: &mut [PlanTerm], catalog: &CatalogStore) {
    for row in terms.iter_mut().flat_map(|t| t.rows.iter_mut()) {
        if row.hours == 0
            && let Some(course) = catalog.course(&CourseCode::new(&row.course))
        {
            row.hours = course.credits;
        }
    }
}

pub fn to_renderable_plan(terms: &[PlanTerm]) -> Vec<RenderablePlanTerm> {
    terms
        .iter()
        .map(|t| RenderablePlanTerm {
            name: t.name.clone(),
            rows: t
                .rows
                .iter()
                .map(|r| RenderablePlanRow {
                    course: r.course.clone(),
                    hours: r.hours,
                })
                .collect(),
            total_hours: t.total_hours(),
        })
        .collect()
}
