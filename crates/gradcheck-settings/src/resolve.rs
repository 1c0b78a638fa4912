use crate::model::{GradcheckConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use camino::Utf8PathBuf;
use globset::Glob;
use gradcheck_catalog::CatalogSources;

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub data_dir: Option<String>,
    pub min_total_credits: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub sources: CatalogSources,
    /// `None` means the policies document (or its default) decides.
    pub min_total_credits_override: Option<u32>,
}

pub fn resolve_config(
    cfg: GradcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut sources = match overrides.data_dir.or(cfg.data_dir) {
        Some(dir) => CatalogSources::in_dir(non_blank("data_dir", dir)?),
        None => CatalogSources::default(),
    };

    if let Some(glob) = cfg.course_glob {
        Glob::new(&glob).with_context(|| format!("invalid course_glob: {glob}"))?;
        sources.course_glob = glob;
    }

    sources.course_files = cfg
        .course_files
        .into_iter()
        .map(|f| non_blank("course_files", f).map(Utf8PathBuf::from))
        .collect::<anyhow::Result<_>>()?;

    if let Some(f) = cfg.requirements_file {
        sources.requirements_file = non_blank("requirements_file", f)?.into();
    }
    if let Some(f) = cfg.policies_file {
        sources.policies_file = non_blank("policies_file", f)?.into();
    }
    if let Some(f) = cfg.plan_file {
        sources.plan_file = non_blank("plan_file", f)?.into();
    }

    Ok(ResolvedConfig {
        sources,
        min_total_credits_override: overrides.min_total_credits.or(cfg.min_total_credits),
    })
}

fn non_blank(key: &str, value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use gradcheck_catalog::{DEFAULT_COURSE_GLOB, DEFAULT_DATA_DIR};

    #[test]
    fn empty_config_uses_defaults() {
        let resolved =
            resolve_config(GradcheckConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.sources.data_dir.as_str(), DEFAULT_DATA_DIR);
        assert_eq!(resolved.sources.course_glob, DEFAULT_COURSE_GLOB);
        assert!(resolved.sources.course_files.is_empty());
        assert_eq!(resolved.min_total_credits_override, None);
    }

    #[test]
    fn config_file_values_are_applied() {
        let cfg = parse_config_toml(
            r#"
schema = "gradcheck.config.v1"
data_dir = "catalog/2025"
course_files = ["core.json", "electives.json"]
requirements_file = "bs_cs.json"
plan_file = "plan.json"
min_total_credits = 120
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.sources.data_dir.as_str(), "catalog/2025");
        assert_eq!(
            resolved.sources.course_files,
            vec![Utf8PathBuf::from("core.json"), Utf8PathBuf::from("electives.json")]
        );
        assert_eq!(
            resolved.sources.requirements_path().as_str(),
            "catalog/2025/bs_cs.json"
        );
        assert_eq!(resolved.sources.policies_file.as_str(), "policies.json");
        assert_eq!(resolved.sources.plan_file.as_str(), "plan.json");
        assert_eq!(resolved.min_total_credits_override, Some(120));
    }

    #[test]
    fn overrides_beat_config() {
        let cfg = GradcheckConfigV1 {
            data_dir: Some("from-config".to_string()),
            min_total_credits: Some(120),
            ..GradcheckConfigV1::default()
        };
        let overrides = Overrides {
            data_dir: Some("from-cli".to_string()),
            min_total_credits: Some(124),
        };
        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(resolved.sources.data_dir.as_str(), "from-cli");
        assert_eq!(resolved.min_total_credits_override, Some(124));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let cfg = GradcheckConfigV1 {
            course_glob: Some("[oops".to_string()),
            ..GradcheckConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("invalid course_glob"));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let cfg = GradcheckConfigV1 {
            schema: Some("gradcheck.config.v9".to_string()),
            ..GradcheckConfigV1::default()
        };
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn blank_paths_are_rejected() {
        let cfg = GradcheckConfigV1 {
            requirements_file: Some("  ".to_string()),
            ..GradcheckConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("requirements_file"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config_toml("data_dir = [").is_err());
        assert!(parse_config_toml("min_total_credits = \"many\"").is_err());
    }
}
