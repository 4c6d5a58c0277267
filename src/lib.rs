//! assetsync - Keep Xcode asset catalogs in step with exported images
//!
//! A library for matching a flat directory of exported PNGs against the
//! image sets of `.xcassets` catalogs, copying new and changed files in
//! and updating each set's `Contents.json`.

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod sync;

pub use catalog::{
    locate, Appearance, Fingerprint, Manifest, ManifestEntry, Reconciler, Reconciliation,
    SourcePool, SyncOutcome,
};
pub use discovery::{scan_catalogs, scan_image_sets, Config, SetKind};
pub use error::{Result, SyncError};
pub use sync::{sync_catalog, sync_root, CatalogReport, ImageSetReport, MissingFile, SyncSummary};
