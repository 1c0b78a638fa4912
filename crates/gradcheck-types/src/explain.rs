//! Explain registry for satisfaction strategies.
//!
//! Maps strategy IDs to human-readable explanations with an example requirement.

use crate::ids;

/// Explanation entry for a satisfaction strategy.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the strategy.
    pub title: &'static str,
    /// When the strategy applies and how the result is recorded.
    pub description: &'static str,
    /// Example requirement record (JSON).
    pub requirement: &'static str,
    /// How a satisfied requirement shows up in the block status.
    pub recorded_as: &'static str,
}

/// Look up an explanation by strategy ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::STRATEGY_EXPLICIT_OPTIONS => Some(explain_explicit_options()),
        ids::STRATEGY_NAME_AS_CODE => Some(explain_name_as_code()),
        ids::STRATEGY_PREFIX_MATCH => Some(explain_prefix_match()),
        ids::STRATEGY_UNSATISFIED => Some(explain_unsatisfied()),
        _ => None,
    }
}

/// List all strategy IDs in evaluation order.
pub fn all_strategy_ids() -> &'static [&'static str] {
    &[
        ids::STRATEGY_EXPLICIT_OPTIONS,
        ids::STRATEGY_NAME_AS_CODE,
        ids::STRATEGY_PREFIX_MATCH,
        ids::STRATEGY_UNSATISFIED,
    ]
}

fn explain_explicit_options() -> Explanation {
    Explanation {
        title: "Explicit Options",
        description: "\
Checked first. Applies when the requirement lists `options`, the acceptable
course codes. The requirement is satisfied when any option, uppercased, is in
the student's completed set. Later strategies are not consulted.",
        requirement: r#"{ "name": "First-Year Writing I", "credits": 3, "options": ["WRIT 100", "WRIT 101"] }"#,
        recorded_as: "First-Year Writing I",
    }
}

fn explain_name_as_code() -> Explanation {
    Explanation {
        title: "Name as Course Code",
        description: "\
Checked when explicit options did not match. The requirement name, uppercased,
is compared against every completed course code. Requirements named after a
single course (\"CSCI 111\") are satisfied this way.",
        requirement: r#"{ "name": "CSCI 111", "credits": 3 }"#,
        recorded_as: "CSCI 111",
    }
}

fn explain_prefix_match() -> Explanation {
    Explanation {
        title: "Allowed Prefix",
        description: "\
Checked when neither options nor the name matched. Applies when the requirement
lists `allowed_prefixes`. Any completed code starting with one of the prefixes
satisfies it. The comparison is a case-sensitive string prefix. When several
codes match, the smallest code is reported.",
        requirement: r#"{ "name": "Fine Arts", "credits": 3, "allowed_prefixes": ["MUS", "THEA"] }"#,
        recorded_as: "Fine Arts (THEA 101)",
    }
}

fn explain_unsatisfied() -> Explanation {
    Explanation {
        title: "Unsatisfied",
        description: "\
No strategy matched. The requirement name is listed under `missing` and its
credits count toward the block's `credits_required` only.",
        requirement: r#"{ "name": "CSCI 487", "credits": 3 }"#,
        recorded_as: "missing: CSCI 487",
    }
}
