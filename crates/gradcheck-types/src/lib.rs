//! Stable DTOs and IDs used across the gradcheck workspace.
//!
//! This crate is intentionally boring:
//! - canonical course codes
//! - the student profile accepted as audit input
//! - data types for the emitted audit report and its envelope
//! - stable string IDs for satisfaction strategies
//! - explain registry for strategy documentation

#![forbid(unsafe_code)]

pub mod code;
pub mod explain;
pub mod ids;
pub mod path;
pub mod profile;
pub mod report;

pub use code::CourseCode;
pub use explain::{Explanation, lookup_explanation};
pub use path::SourcePath;
pub use profile::StudentProfile;
pub use report::{
    AuditDiagnostics, AuditEnvelope, AuditReport, AuditStatus, BlockStatus, SCHEMA_AUDIT_V1,
    SourceWarning, ToolMeta,
};
