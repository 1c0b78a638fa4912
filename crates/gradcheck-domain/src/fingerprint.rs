use crate::model::CatalogStore;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a normalized catalog.
///
/// Identity fields, in store order:
/// - per course: code, credits
/// - per block: name, then each requirement's name, credits, options and prefixes
///
/// Descriptions, names and raw hint fields do not affect matching and are left out.
/// Every field is length-prefixed, so no choice of names or codes can make two
/// different catalogs hash the same input.
pub fn catalog_fingerprint(catalog: &CatalogStore) -> String {
    let mut hasher = Sha256::new();

    write_count(&mut hasher, catalog.courses.len());
    for course in catalog.courses.values() {
        write_str(&mut hasher, course.code.as_str());
        hasher.update(course.credits.to_le_bytes());
    }

    write_count(&mut hasher, catalog.blocks.len());
    for block in catalog.blocks.values() {
        write_str(&mut hasher, &block.name);
        write_count(&mut hasher, block.requirements.len());
        for req in &block.requirements {
            write_str(&mut hasher, &req.name);
            hasher.update(req.credits.to_le_bytes());
            write_list(&mut hasher, req.options.as_deref());
            write_list(&mut hasher, req.allowed_prefixes.as_deref());
        }
    }

    hex::encode(hasher.finalize())
}

fn write_count(hasher: &mut Sha256, n: usize) {
    hasher.update((n as u64).to_le_bytes());
}

fn write_str(hasher: &mut Sha256, s: &str) {
    write_count(hasher, s.len());
    hasher.update(s.as_bytes());
}

// `None` and `Some(empty)` hash differently.
fn write_list(hasher: &mut Sha256, values: Option<&[String]>) {
    match values {
        None => hasher.update([0u8]),
        Some(values) => {
            hasher.update([1u8]);
            write_count(hasher, values.len());
            for v in values {
                write_str(hasher, v);
            }
        }
    }
}
