use camino::{Utf8Path, Utf8PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_COURSE_GLOB: &str = "*courses*.json";
pub const DEFAULT_REQUIREMENTS_FILE: &str = "degree_requirements.json";
pub const DEFAULT_POLICIES_FILE: &str = "policies.json";
pub const DEFAULT_PLAN_FILE: &str = "four_year_plan.json";

/// Where catalog documents live. Relative file names resolve against `data_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSources {
    pub data_dir: Utf8PathBuf,
    /// Explicit course files, in load order. Empty means discover by `course_glob`.
    pub course_files: Vec<Utf8PathBuf>,
    pub course_glob: String,
    pub requirements_file: Utf8PathBuf,
    pub policies_file: Utf8PathBuf,
    pub plan_file: Utf8PathBuf,
}

impl CatalogSources {
    /// Default file names under `data_dir`.
    pub fn in_dir(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            course_files: Vec::new(),
            course_glob: DEFAULT_COURSE_GLOB.to_string(),
            requirements_file: DEFAULT_REQUIREMENTS_FILE.into(),
            policies_file: DEFAULT_POLICIES_FILE.into(),
            plan_file: DEFAULT_PLAN_FILE.into(),
        }
    }

    pub fn resolve(&self, file: &Utf8Path) -> Utf8PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn requirements_path(&self) -> Utf8PathBuf {
        self.resolve(&self.requirements_file)
    }

    pub fn policies_path(&self) -> Utf8PathBuf {
        self.resolve(&self.policies_file)
    }

    pub fn plan_path(&self) -> Utf8PathBuf {
        self.resolve(&self.plan_file)
    }
}

impl Default for CatalogSources {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_files_resolve_under_data_dir() {
        let sources = CatalogSources::in_dir("catalog/2025");
        assert_eq!(
            sources.requirements_path(),
            Utf8PathBuf::from("catalog/2025/degree_requirements.json")
        );
        assert_eq!(
            sources.plan_path(),
            Utf8PathBuf::from("catalog/2025/four_year_plan.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_files_are_kept() {
        let mut sources = CatalogSources::default();
        sources.policies_file = Utf8PathBuf::from("/etc/gradcheck/policies.json");
        assert_eq!(
            sources.policies_path(),
            Utf8PathBuf::from("/etc/gradcheck/policies.json")
        );
    }
}
