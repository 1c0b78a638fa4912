use anyhow::Context;
use camino::Utf8Path;
use gradcheck_settings::{GradcheckConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve config text, then anchor a relative data directory at `root`.
///
/// Empty config text is allowed; defaults apply.
pub fn resolve_for_root(
    root: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        GradcheckConfigV1::default()
    } else {
        gradcheck_settings::parse_config_toml(config_text).context("parse config")?
    };

    let mut resolved =
        gradcheck_settings::resolve_config(cfg, overrides).context("resolve config")?;
    if resolved.sources.data_dir.is_relative() {
        resolved.sources.data_dir = root.join(&resolved.sources.data_dir);
    }
    Ok(resolved)
}
