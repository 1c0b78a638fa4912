//! Config parsing and catalog source resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{GradcheckConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `gradcheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GradcheckConfigV1> {
    let cfg: GradcheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve where catalog documents come from and which policy overrides apply.
pub fn resolve_config(
    cfg: GradcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
