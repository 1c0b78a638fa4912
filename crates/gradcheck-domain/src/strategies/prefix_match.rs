use super::Satisfaction;
use crate::model::{CompletedCourses, Requirement};
use gradcheck_types::ids;

pub fn run(req: &Requirement, completed: &CompletedCourses) -> Option<Satisfaction> {
    let prefixes = req.allowed_prefixes.as_deref()?;

    // Completed codes iterate in ascending order, so the smallest match is reported.
    let matched = completed
        .iter()
        .find(|code| prefixes.iter().any(|p| code.starts_with(p)))?;

    Some(Satisfaction {
        strategy: ids::STRATEGY_PREFIX_MATCH,
        descriptor: format!("{} ({})", req.name, matched),
        matched: matched.clone(),
    })
}
