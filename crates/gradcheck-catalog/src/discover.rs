use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::Glob;
use walkdir::WalkDir;

/// Find course files directly under `data_dir` whose file name matches `pattern`.
///
/// Results are sorted so load order (and therefore last-file-wins) does not
/// depend on directory traversal order. A missing directory yields no files.
pub fn discover_course_files(
    data_dir: &Utf8Path,
    pattern: &str,
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let matcher = Glob::new(pattern)
        .with_context(|| format!("compile course glob {pattern:?}"))?
        .compile_matcher();

    if !data_dir.is_dir() {
        tracing::debug!(%data_dir, "data directory not found; no course files discovered");
        return Ok(Vec::new());
    }

    let mut out: Vec<Utf8PathBuf> = WalkDir::new(data_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| matcher.is_match(name))
        })
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
        .collect();

    out.sort();
    Ok(out)
}
