use gradcheck_types::CourseCode;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Term {
    Fall,
    Spring,
    Summer,
}

impl Term {
    /// Case-insensitive lookup of a single term token.
    pub fn from_token(token: &str) -> Option<Term> {
        match token.trim().to_ascii_lowercase().as_str() {
            "fall" | "autumn" => Some(Term::Fall),
            "spring" => Some(Term::Spring),
            "summer" => Some(Term::Summer),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    pub credits: u32,
    pub description: String,
    /// Free-text prerequisite clauses, never resolved to codes.
    pub prerequisites: Vec<String>,
    /// `None` when the catalog does not say.
    pub semester_offered: Option<BTreeSet<Term>>,
    pub attributes: BTreeSet<String>,
}

/// One rule inside a block.
///
/// `exclusions`, `prerequisites` and `filter` are carried as raw JSON. Matching
/// does not consult them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Requirement {
    pub name: String,
    pub credits: u32,
    pub options: Option<Vec<String>>,
    pub allowed_prefixes: Option<Vec<String>>,
    pub exclusions: Option<Value>,
    pub prerequisites: Option<Value>,
    pub filter: Option<Value>,
    pub notes: Option<String>,
}

impl Requirement {
    pub fn named<S: Into<String>>(name: S, credits: u32) -> Self {
        Self {
            name: name.into(),
            credits,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RequirementBlock {
    pub name: String,
    pub requirements: Vec<Requirement>,
}

impl RequirementBlock {
    pub fn credits_required(&self) -> u32 {
        self.requirements
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.credits))
    }
}

/// Courses keyed by canonical code and blocks keyed by name.
///
/// Built once per invocation and only read during evaluation.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    pub courses: BTreeMap<CourseCode, Course>,
    pub blocks: BTreeMap<String, RequirementBlock>,
}

impl CatalogStore {
    /// Insert a course, replacing any earlier entry with the same code.
    pub fn insert_course(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.code.clone(), course)
    }

    pub fn insert_block(&mut self, block: RequirementBlock) -> Option<RequirementBlock> {
        self.blocks.insert(block.name.clone(), block)
    }

    pub fn course(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.blocks.is_empty()
    }
}

/// A student's completed courses as canonical codes, ordered and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletedCourses(BTreeSet<CourseCode>);

impl CompletedCourses {
    /// Normalize caller-supplied identifiers. Blank entries are dropped.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .map(CourseCode::new)
                .filter(|c| !c.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.0.contains(code)
    }

    /// Codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One course slot in an advising plan term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub course: String,
    pub hours: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlanTerm {
    pub name: String,
    pub rows: Vec<PlanRow>,
}

impl PlanTerm {
    pub fn total_hours(&self) -> u32 {
        self.rows
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_courses_normalize_and_dedup() {
        let done = CompletedCourses::from_raw(["csci 111", "CSCI 111 ", "  ", "math 261"]);
        let codes: Vec<&str> = done.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["CSCI 111", "MATH 261"]);
    }

    #[test]
    fn insert_course_is_last_write_wins() {
        let mut store = CatalogStore::default();
        store.insert_course(Course {
            code: CourseCode::new("CSCI 111"),
            name: "Old".to_string(),
            credits: 4,
            ..Course::default()
        });
        let replaced = store.insert_course(Course {
            code: CourseCode::new("csci 111"),
            name: "Computer Science I".to_string(),
            credits: 3,
            ..Course::default()
        });
        assert_eq!(replaced.map(|c| c.name), Some("Old".to_string()));
        let course = store.course(&CourseCode::new("CSCI 111")).expect("course");
        assert_eq!(course.credits, 3);
        assert_eq!(store.courses.len(), 1);
    }

    #[test]
    fn plan_term_totals_hours() {
        let term = PlanTerm {
            name: "Fall 2025".to_string(),
            rows: vec![
                PlanRow {
                    course: "CSCI 111".to_string(),
                    hours: 3,
                },
                PlanRow {
                    course: "MATH 261".to_string(),
                    hours: 4,
                },
            ],
        };
        assert_eq!(term.total_hours(), 7);
    }

    #[test]
    fn term_tokens_are_case_insensitive() {
        assert_eq!(Term::from_token(" FALL "), Some(Term::Fall));
        assert_eq!(Term::from_token("spring"), Some(Term::Spring));
        assert_eq!(Term::from_token("Winter"), None);
    }
}
