//! Shared test utilities for the gradcheck workspace.
//!
//! Integration tests in several crates compare emitted reports against fixture
//! expectations and need the same normalization and fixture lookup.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// Keys present at the root of every audit envelope.
const ENVELOPE_KEYS: &[&str] = &["schema", "tool", "status", "audit", "diagnostics"];

/// `<repo root>/tests/fixtures`, given a crate's `CARGO_MANIFEST_DIR` under `crates/`.
pub fn fixtures_dir(manifest_dir: &str) -> PathBuf {
    Path::new(manifest_dir)
        .ancestors()
        .nth(2)
        .unwrap_or_else(|| Path::new("."))
        .join("tests")
        .join("fixtures")
}

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like an audit envelope. Nested objects
///    that happen to carry `name`/`version` pairs are left alone.
///
/// 2. **Recursive**: `started_at` and `finished_at` are replaced at any depth
///    because their placeholder values cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ENVELOPE_KEYS.iter().all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
