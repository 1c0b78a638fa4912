use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_remaining_terms() -> u32 {
    8
}

fn default_target_hours() -> u32 {
    15
}

fn default_max_hours() -> u32 {
    18
}

/// Audit input describing one student.
///
/// `courses_done` is free text supplied by the caller; the engine normalizes it
/// to canonical course codes before any comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StudentProfile {
    pub catalog_year: String,

    #[serde(default)]
    pub courses_done: Vec<String>,

    #[serde(default = "default_remaining_terms")]
    pub remaining_terms: u32,

    /// Preferred credit hours per term.
    #[serde(default = "default_target_hours")]
    pub target_hours: u32,

    #[serde(default = "default_max_hours")]
    pub max_hours: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
}

impl StudentProfile {
    pub fn new<S: Into<String>>(catalog_year: S, courses_done: Vec<String>) -> Self {
        Self {
            catalog_year: catalog_year.into(),
            courses_done,
            remaining_terms: default_remaining_terms(),
            target_hours: default_target_hours(),
            max_hours: default_max_hours(),
            gpa: None,
            emphasis: None,
        }
    }
}
