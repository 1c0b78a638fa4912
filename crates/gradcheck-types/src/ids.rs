//! Stable identifiers for satisfaction strategies and diagnostics.
//!
//! Strategy IDs are snake_case and appear in logs and in `gradcheck explain`.

// Satisfaction strategies, in evaluation order.
pub const STRATEGY_EXPLICIT_OPTIONS: &str = "explicit_options";
pub const STRATEGY_NAME_AS_CODE: &str = "name_as_code";
pub const STRATEGY_PREFIX_MATCH: &str = "prefix_match";
pub const STRATEGY_UNSATISFIED: &str = "unsatisfied";

// Source-load warning codes.
pub const CODE_SOURCE_MISSING: &str = "source_missing";
pub const CODE_SOURCE_UNREADABLE: &str = "source_unreadable";
pub const CODE_SOURCE_MALFORMED: &str = "source_malformed";

// Tool-level
pub const TOOL_NAME: &str = "gradcheck";
