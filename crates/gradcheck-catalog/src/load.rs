use crate::discover::discover_course_files;
use crate::records;
use crate::sources::CatalogSources;
use camino::{Utf8Path, Utf8PathBuf};
use gradcheck_domain::model::{CatalogStore, PlanTerm, RequirementBlock};
use gradcheck_domain::policy::AuditPolicy;
use gradcheck_types::ids;
use gradcheck_types::{SourcePath, SourceWarning};
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;

/// Why a source document could not be used.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{path} not found")]
    Missing { path: Utf8PathBuf },
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid JSON: {source}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            SourceError::Missing { path }
            | SourceError::Unreadable { path, .. }
            | SourceError::Malformed { path, .. } => path,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Missing { .. } => ids::CODE_SOURCE_MISSING,
            SourceError::Unreadable { .. } => ids::CODE_SOURCE_UNREADABLE,
            SourceError::Malformed { .. } => ids::CODE_SOURCE_MALFORMED,
        }
    }

    pub fn to_warning(&self) -> SourceWarning {
        SourceWarning {
            code: self.code().to_string(),
            source: SourcePath::from(self.path()),
            message: self.to_string(),
        }
    }
}

/// A loaded value plus the warnings collected while loading it.
#[derive(Clone, Debug, Default)]
pub struct Loaded<T> {
    pub value: T,
    pub warnings: Vec<SourceWarning>,
}

/// Everything the audit needs from the data directory.
#[derive(Clone, Debug, Default)]
pub struct LoadedCatalog {
    pub store: CatalogStore,
    pub policy: AuditPolicy,
    pub warnings: Vec<SourceWarning>,
}

pub fn read_json(path: &Utf8Path) -> Result<Value, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&text).map_err(|source| SourceError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn read_or_warn(path: &Utf8Path, warnings: &mut Vec<SourceWarning>) -> Value {
    match read_json(path) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(code = err.code(), "{err}; treating as empty");
            warnings.push(err.to_warning());
            Value::Null
        }
    }
}

/// Parse course files in parallel, then merge in the given order so a later
/// file overwrites an earlier file's entry for the same code.
pub fn load_courses(paths: &[Utf8PathBuf]) -> Loaded<CatalogStore> {
    let parsed: Vec<_> = paths
        .par_iter()
        .map(|path| (path, read_json(path).map(|doc| records::normalize_courses(&doc))))
        .collect();

    let mut store = CatalogStore::default();
    let mut warnings = Vec::new();
    for (path, result) in parsed {
        match result {
            Ok(courses) => {
                tracing::debug!(%path, count = courses.len(), "loaded course file");
                for course in courses {
                    if let Some(old) = store.insert_course(course) {
                        tracing::debug!(code = %old.code, %path, "course redefined");
                    }
                }
            }
            Err(err) => {
                tracing::warn!(code = err.code(), "{err}; treating as empty");
                warnings.push(err.to_warning());
            }
        }
    }

    Loaded {
        value: store,
        warnings,
    }
}

pub fn load_requirement_blocks(path: &Utf8Path) -> Loaded<BTreeMap<String, RequirementBlock>> {
    let mut warnings = Vec::new();
    let doc = read_or_warn(path, &mut warnings);
    Loaded {
        value: records::normalize_blocks(&doc),
        warnings,
    }
}

pub fn load_policy(path: &Utf8Path) -> Loaded<AuditPolicy> {
    let mut warnings = Vec::new();
    let doc = read_or_warn(path, &mut warnings);
    Loaded {
        value: records::normalize_policy(&doc),
        warnings,
    }
}

pub fn load_four_year_plan(path: &Utf8Path) -> Loaded<Vec<PlanTerm>> {
    let mut warnings = Vec::new();
    let doc = read_or_warn(path, &mut warnings);
    Loaded {
        value: records::normalize_plan(&doc),
        warnings,
    }
}

/// Course files to load: the explicit list when configured, else discovery.
pub fn course_paths(sources: &CatalogSources) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if sources.course_files.is_empty() {
        discover_course_files(&sources.data_dir, &sources.course_glob)
    } else {
        Ok(sources
            .course_files
            .iter()
            .map(|f| sources.resolve(f))
            .collect())
    }
}

/// Load courses, requirement blocks and policy.
///
/// Only an unusable course glob is an error; unreadable or malformed documents
/// become warnings and contribute nothing.
pub fn load_catalog(sources: &CatalogSources) -> anyhow::Result<LoadedCatalog> {
    let paths = course_paths(sources)?;

    let courses = load_courses(&paths);
    let blocks = load_requirement_blocks(&sources.requirements_path());
    let policy = load_policy(&sources.policies_path());

    let mut store = courses.value;
    for (_, block) in blocks.value {
        store.insert_block(block);
    }

    let mut warnings = courses.warnings;
    warnings.extend(blocks.warnings);
    warnings.extend(policy.warnings);

    tracing::info!(
        course_files = paths.len(),
        courses = store.courses.len(),
        blocks = store.blocks.len(),
        warnings = warnings.len(),
        "catalog loaded"
    );

    Ok(LoadedCatalog {
        store,
        policy: policy.value,
        warnings,
    })
}
