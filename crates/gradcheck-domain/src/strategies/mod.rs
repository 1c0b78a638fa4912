//! Satisfaction strategies, evaluated in a fixed order with first match wins.
//!
//! Each strategy inspects one requirement against the completed set and either
//! claims it or passes. No strategy sees another's result and nothing is scored.

use crate::model::{CompletedCourses, Requirement};
use gradcheck_types::{CourseCode, ids};

mod explicit_options;
mod name_as_code;
mod prefix_match;


/// How a requirement was satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Satisfaction {
    pub strategy: &'static str,
    /// Entry recorded in the block's `completed` list.
    pub descriptor: String,
    /// The completed code that triggered the match.
    pub matched: CourseCode,
}

pub type StrategyFn = fn(&Requirement, &CompletedCourses) -> Option<Satisfaction>;

/// The strategies in priority order. `unsatisfied` is the fall-through, not an entry.
pub const ORDERED: &[(&str, StrategyFn)] = &[
    (ids::STRATEGY_EXPLICIT_OPTIONS, explicit_options::run),
    (ids::STRATEGY_NAME_AS_CODE, name_as_code::run),
    (ids::STRATEGY_PREFIX_MATCH, prefix_match::run),
];

/// Run the strategies in order and return the first that claims the requirement.
pub fn first_match(req: &Requirement, completed: &CompletedCourses) -> Option<Satisfaction> {
    ORDERED.iter().find_map(|(_, strategy)| strategy(req, completed))
}
