//! Resolves which exported image satisfies a manifest entry.
//!
//! Resolution order, first hit wins:
//! 1. the entry's recorded filename, if it still exists in the pool
//! 2. `<base><-appearance><@scale>.png`
//! 3. `<base>-light<@scale>.png`
//!
//! `base` is the image set name without its `.imageset` / `.appiconset`
//! suffix, with dots replaced by hyphens, lowercased.

use std::path::{Path, PathBuf};

use tracing::trace;

use super::manifest::ManifestEntry;
use super::pool::SourcePool;

/// Find the source image for `entry` in an image set named `image_set`.
pub fn locate(image_set: &str, pool: &SourcePool, entry: &ManifestEntry) -> Option<PathBuf> {
    if let Some(recorded) = entry.filename.as_deref() {
        if let Some(path) = pool.find(recorded) {
            return Some(path);
        }
    }

    let base = base_name(image_set);
    let scale = scale_suffix(entry.effective_scale());

    let derived = format!("{}{}{}.png", base, appearance_suffix(entry), scale);
    trace!(image_set, candidate = %derived, "trying derived name");
    if let Some(path) = pool.find(&derived) {
        return Some(path);
    }

    let light = format!("{}-light{}.png", base, scale);
    trace!(image_set, candidate = %light, "trying light fallback");
    pool.find(&light)
}

/// Derive the export base name from an image set directory name.
pub fn base_name(image_set: &str) -> String {
    let stem = Path::new(image_set)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(image_set);

    stem.replace('.', "-").to_lowercase()
}

/// `-<value>` of the first recorded appearance, or empty.
pub fn appearance_suffix(entry: &ManifestEntry) -> String {
    entry
        .appearances
        .as_ref()
        .and_then(|a| a.first())
        .map(|a| format!("-{}", a.value))
        .unwrap_or_default()
}

/// Empty for `1x`, otherwise `@<scale>`.
pub fn scale_suffix(scale: &str) -> String {
    if scale == "1x" {
        String::new()
    } else {
        format!("@{}", scale)
    }
}
