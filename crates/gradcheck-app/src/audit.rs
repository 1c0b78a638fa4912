//! The `audit` use case: load the catalog, evaluate a profile, wrap the report.

use camino::Utf8Path;
use gradcheck_domain::fingerprint::catalog_fingerprint;
use gradcheck_domain::policy::AuditPolicy;
use gradcheck_settings::{Overrides, ResolvedConfig};
use gradcheck_types::{
    AuditDiagnostics, AuditEnvelope, AuditStatus, SCHEMA_AUDIT_V1, StudentProfile, ToolMeta, ids,
};
use time::OffsetDateTime;

use crate::config::resolve_for_root;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Directory that config and relative data paths resolve against.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub profile: StudentProfile,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub envelope: AuditEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case: resolve config, load catalog, evaluate, produce the envelope.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_for_root(input.root, input.config_text, input.overrides)?;
    let loaded = gradcheck_catalog::load_catalog(&resolved.sources)?;

    let policy = match resolved.min_total_credits_override {
        Some(n) => AuditPolicy::with_min_total_credits(n),
        None => loaded.policy,
    };

    let outcome = gradcheck_domain::evaluate(&input.profile, &loaded.store, &policy);
    let status = outcome.report.status();

    tracing::info!(
        catalog_year = %outcome.report.catalog_year,
        credits_done = outcome.report.credits_done,
        credits_required = outcome.report.credits_required,
        unrecognized = outcome.unrecognized_courses.len(),
        ?status,
        "audit finished"
    );

    let diagnostics = AuditDiagnostics {
        unrecognized_courses: outcome.unrecognized_courses,
        courses_loaded: count(loaded.store.courses.len()),
        blocks_loaded: count(loaded.store.blocks.len()),
        catalog_fingerprint: catalog_fingerprint(&loaded.store),
        warnings: loaded.warnings,
    };

    let envelope = AuditEnvelope {
        schema: SCHEMA_AUDIT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        status,
        audit: outcome.report,
        diagnostics,
    };

    Ok(AuditOutput {
        envelope,
        resolved_config: resolved,
    })
}

/// Map status to exit code: 0 = complete, 2 = incomplete under `strict`, else 0.
pub fn status_exit_code(status: AuditStatus, strict: bool) -> i32 {
    match status {
        AuditStatus::Complete => 0,
        AuditStatus::Incomplete if strict => 2,
        AuditStatus::Incomplete => 0,
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
