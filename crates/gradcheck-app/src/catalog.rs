//! The `catalog` use case: show the normalized catalog the audit would see.

use camino::Utf8Path;
use gradcheck_domain::fingerprint::catalog_fingerprint;
use gradcheck_domain::model::{Course, RequirementBlock};
use gradcheck_settings::Overrides;
use gradcheck_types::SourceWarning;
use serde::Serialize;

use crate::config::resolve_for_root;

#[derive(Clone, Debug)]
pub struct CatalogInput<'a> {
    pub root: &'a Utf8Path,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

/// Normalized catalog contents, ordered by course code and block name.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogListing {
    pub courses: Vec<Course>,
    pub blocks: Vec<RequirementBlock>,
    pub min_total_credits: u32,
    pub catalog_fingerprint: String,
    pub warnings: Vec<SourceWarning>,
}

pub fn run_catalog(input: CatalogInput<'_>) -> anyhow::Result<CatalogListing> {
    let resolved = resolve_for_root(input.root, input.config_text, input.overrides)?;
    let loaded = gradcheck_catalog::load_catalog(&resolved.sources)?;

    let catalog_fingerprint = catalog_fingerprint(&loaded.store);
    let min_total_credits = resolved
        .min_total_credits_override
        .unwrap_or(loaded.policy.min_total_credits);

    Ok(CatalogListing {
        courses: loaded.store.courses.into_values().collect(),
        blocks: loaded.store.blocks.into_values().collect(),
        min_total_credits,
        catalog_fingerprint,
        warnings: loaded.warnings,
    })
}
