//! Directory scanner for catalogs and image sets.
//!
//! Only immediate children are considered. Entries are returned sorted by
//! file name so reports come out in a reproducible order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SyncError};

/// Extension of an asset catalog directory.
pub const CATALOG_EXTENSION: &str = "xcassets";

/// The kind of image set directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    ImageSet,
    AppIconSet,
}

impl SetKind {
    /// Get the directory extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            SetKind::ImageSet => "imageset",
            SetKind::AppIconSet => "appiconset",
        }
    }
}

/// Detect the image set kind from a directory path based on its extension.
pub fn detect_set_kind(path: &Path) -> Option<SetKind> {
    let ext = path.extension()?.to_str()?;
    [SetKind::ImageSet, SetKind::AppIconSet]
        .into_iter()
        .find(|kind| kind.extension() == ext)
}

/// Whether a path names an asset catalog.
pub fn is_catalog(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
}

/// Catalog directories directly under `root`.
pub fn scan_catalogs(root: &Path) -> Result<Vec<PathBuf>> {
    child_dirs(root, is_catalog)
}

/// Image set and app icon set directories directly under `catalog`.
pub fn scan_image_sets(catalog: &Path) -> Result<Vec<PathBuf>> {
    child_dirs(catalog, |p| detect_set_kind(p).is_some())
}

fn child_dirs(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SyncError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to list directory: {}", e),
        })?;

        if entry.path().is_dir() && keep(entry.path()) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}
