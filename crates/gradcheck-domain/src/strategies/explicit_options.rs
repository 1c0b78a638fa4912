use super::Satisfaction;
use crate::model::{CompletedCourses, Requirement};
use gradcheck_types::{CourseCode, ids};

pub fn run(req: &Requirement, completed: &CompletedCourses) -> Option<Satisfaction> {
    let options = req.options.as_deref()?;

    let matched = options
        .iter()
        .map(CourseCode::new)
        .find(|code| completed.contains(code))?;

    Some(Satisfaction {
        strategy: ids::STRATEGY_EXPLICIT_OPTIONS,
        descriptor: req.name.clone(),
        matched,
    })
}
