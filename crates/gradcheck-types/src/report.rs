use crate::{CourseCode, SourcePath};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for the audit envelope.
pub const SCHEMA_AUDIT_V1: &str = "gradcheck.audit.v1";

/// Completion status of one requirement block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BlockStatus {
    /// Satisfied requirement descriptors, in block order.
    pub completed: Vec<String>,
    /// Unsatisfied requirement names, in block order.
    pub missing: Vec<String>,
    /// Sum of every requirement's credits, satisfied or not.
    pub credits_required: u32,
    /// Sum of satisfied requirements' credits.
    pub credits_done: u32,
}

impl BlockStatus {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The audit result for one student.
///
/// Top-level `credits_done` counts catalog credits of completed courses, while
/// `credits_required` comes from policy. Neither is derived from the block
/// totals, and the two views are not expected to agree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    pub catalog_year: String,
    pub credits_done: u32,
    pub credits_required: u32,
    pub blocks: BTreeMap<String, BlockStatus>,
}

impl AuditReport {
    pub fn status(&self) -> AuditStatus {
        let blocks_done = self.blocks.values().all(BlockStatus::is_complete);
        if blocks_done && self.credits_done >= self.credits_required {
            AuditStatus::Complete
        } else {
            AuditStatus::Incomplete
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Complete,
    Incomplete,
}

/// A catalog source that could not be used and was treated as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceWarning {
    pub code: String,
    pub source: SourcePath,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditDiagnostics {
    /// Completed codes with no catalog entry; they contribute no credits.
    #[serde(default)]
    pub unrecognized_courses: Vec<CourseCode>,
    pub courses_loaded: u32,
    pub blocks_loaded: u32,
    /// SHA-256 over the normalized catalog, hex encoded.
    pub catalog_fingerprint: String,
    #[serde(default)]
    pub warnings: Vec<SourceWarning>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: AuditStatus,
    pub audit: AuditReport,
    pub diagnostics: AuditDiagnostics,
}
