use super::Satisfaction;
use crate::model::{CompletedCourses, Requirement};
use gradcheck_types::ids;

pub fn run(req: &Requirement, completed: &CompletedCourses) -> Option<Satisfaction> {
    // Uppercased only; a name with stray whitespace is not a code.
    let wanted = req.name.to_uppercase();
    let code = completed.iter().find(|code| code.as_str() == wanted)?;

    Some(Satisfaction {
        strategy: ids::STRATEGY_NAME_AS_CODE,
        descriptor: req.name.clone(),
        matched: code.clone(),
    })
}
