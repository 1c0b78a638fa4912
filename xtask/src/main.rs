//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaEntry {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_audit_schema() -> schemars::Schema {
    schema_for!(gradcheck_types::AuditEnvelope)
}

fn generate_profile_schema() -> schemars::Schema {
    schema_for!(gradcheck_types::StudentProfile)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(gradcheck_settings::GradcheckConfigV1)
}

fn schema_entries() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry {
            filename: "gradcheck.audit.v1.json",
            generate: generate_audit_schema,
        },
        SchemaEntry {
            filename: "gradcheck.profile.v1.json",
            generate: generate_profile_schema,
        },
        SchemaEntry {
            filename: "gradcheck.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for entry in schema_entries() {
        let json = serialize_schema(&(entry.generate)())?;
        let path = dir.join(entry.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for entry in schema_entries() {
        let path = dir.join(entry.filename);
        if !path.exists() {
            missing.push(entry.filename);
            continue;
        }

        let expected = serialize_schema(&(entry.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(entry.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Run the built binary on every fixture with a `profile.json`, validate the
/// report against the audit schema, and compare `audit` with
/// `expected.audit.json` when the fixture has one.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_audit_schema())?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile audit schema: {}", e))?;

    let bin = project_root().join("target").join("debug").join("gradcheck");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");
    if !bin.exists() {
        bail!(
            "gradcheck binary not found at {}.\nRun `cargo build -p gradcheck-cli` first.",
            bin.display()
        );
    }

    let fixtures = project_root().join("tests").join("fixtures");
    let mut errors = Vec::new();
    let mut checked = 0;

    let mut dirs: Vec<PathBuf> = fs::read_dir(&fixtures)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.join("profile.json").is_file())
        .collect();
    dirs.sort();

    for dir in dirs {
        let name = dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let temp = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp.path().join("report.json");

        let status = std::process::Command::new(&bin)
            .arg("--root")
            .arg(&dir)
            .arg("audit")
            .arg("--profile")
            .arg(dir.join("profile.json"))
            .arg("--report-out")
            .arg(&report_out)
            .status()
            .with_context(|| format!("run gradcheck on {name}"))?;
        if !status.success() {
            errors.push(format!("{name}: gradcheck exited with {status}"));
            continue;
        }

        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&report_out).with_context(|| format!("read report for {name}"))?,
        )?;
        for err in validator.iter_errors(&report) {
            errors.push(format!("{name}: schema validation: {err}"));
        }

        let expected_path = dir.join("expected.audit.json");
        if expected_path.exists() {
            let expected: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&expected_path)?)?;
            let actual = gradcheck_test_util::normalize_nondeterministic(report);
            if actual["audit"] != expected {
                errors.push(format!("{name}: audit differs from expected.audit.json"));
            }
        }

        checked += 1;
        println!("  ✓ {}", name);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance failed with {} errors", errors.len());
    }

    println!("\n✓ {} fixtures conform", checked);
    Ok(())
}

/// Validate that every strategy ID has a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let ids = gradcheck_types::explain::all_strategy_ids();
    let mut errors = Vec::new();

    for id in ids {
        match gradcheck_types::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Strategy '{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Strategy '{}' has empty description", id));
                }
                if exp.recorded_as.is_empty() {
                    errors.push(format!("Strategy '{}' has empty recorded_as", id));
                }
            }
            None => errors.push(format!("Strategy '{}' has no explanation", id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} strategies have explanations", ids.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Explain coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the built binary on fixtures and validate its reports");
    eprintln!("  explain-coverage  Validate all strategy IDs have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for entry in schema_entries() {
                println!("{}", entry.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
