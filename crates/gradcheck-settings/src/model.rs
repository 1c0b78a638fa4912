use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "gradcheck.config.v1";

/// `gradcheck.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
/// Relative paths resolve against the directory holding the catalog documents, which is itself
/// relative to the audit root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradcheckConfigV1 {
    /// Optional schema string for tooling (`gradcheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory holding the catalog documents (default `data`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Course files in load order. Later files overwrite earlier entries for the same code.
    /// When empty, files matching `course_glob` are discovered instead.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub course_files: Vec<String>,

    /// File-name glob used for discovery (default `*courses*.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_glob: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_file: Option<String>,

    /// Overrides `min_total_credits` from the policies document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_total_credits: Option<u32>,
}
