//! Catalog-level synchronization.
//!
//! Walks the image sets of one or more catalogs, reconciles each against
//! the source pool and collects per-image-set reports. Image sets are
//! processed one after another in directory-name order and the first
//! error aborts the run.

mod summary;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{Reconciler, Reconciliation, SourcePool, SyncOutcome};
use crate::discovery::{scan_catalogs, scan_image_sets};
use crate::error::Result;

pub use summary::{MissingFile, SyncSummary};

/// Outcome lists for one image set, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSetReport {
    /// Image set directory name, e.g. `Logo.imageset`.
    pub name: String,
    /// Whether any entry ended up unassigned.
    pub unassigned: bool,
    pub updated: Vec<String>,
    pub missing: Vec<String>,
    pub skipped: Vec<String>,
    pub manifest_rewritten: bool,
}

impl From<Reconciliation> for ImageSetReport {
    fn from(reconciliation: Reconciliation) -> Self {
        let mut report = ImageSetReport {
            name: reconciliation.image_set,
            manifest_rewritten: reconciliation.manifest_rewritten,
            ..Default::default()
        };

        for outcome in reconciliation.outcomes {
            match outcome {
                SyncOutcome::Unassigned => report.unassigned = true,
                SyncOutcome::Missing(file) => report.missing.push(file),
                SyncOutcome::Updated(file) => report.updated.push(file),
                SyncOutcome::Skipped(file) => report.skipped.push(file),
            }
        }

        report
    }
}

/// Reports for every image set in one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub path: PathBuf,
    /// Keyed by image set name, in directory listing order.
    pub image_sets: Vec<ImageSetReport>,
}

impl CatalogReport {
    /// Look up the report for an image set by directory name.
    pub fn get(&self, name: &str) -> Option<&ImageSetReport> {
        self.image_sets.iter().find(|r| r.name == name)
    }
}

/// Synchronize every image set in `catalog` from `pool`.
pub fn sync_catalog(catalog: &Path, pool: &SourcePool) -> Result<CatalogReport> {
    sync_catalog_with(catalog, &Reconciler::new(pool))
}

/// Synchronize a catalog using a configured reconciler.
pub fn sync_catalog_with(catalog: &Path, reconciler: &Reconciler<'_>) -> Result<CatalogReport> {
    let mut image_sets = Vec::new();

    for set in scan_image_sets(catalog)? {
        image_sets.push(ImageSetReport::from(reconciler.reconcile(&set)?));
    }

    info!(
        catalog = %catalog.display(),
        image_sets = image_sets.len(),
        "catalog synced"
    );

    Ok(CatalogReport {
        path: catalog.to_path_buf(),
        image_sets,
    })
}

/// Synchronize every catalog directly under `root`.
pub fn sync_root(root: &Path, reconciler: &Reconciler<'_>) -> Result<Vec<CatalogReport>> {
    scan_catalogs(root)?
        .iter()
        .map(|catalog| sync_catalog_with(catalog, reconciler))
        .collect()
}
