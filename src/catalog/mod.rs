//! Image set resolution and reconciliation.
//!
//! - [`manifest`]: `Contents.json` model and writer
//! - [`pool`]: the flat source directory of exported images
//! - [`locator`]: picks the source image for one manifest entry
//! - [`reconcile`]: converges one image set and classifies each entry

pub mod locator;
pub mod manifest;
pub mod pool;
pub mod reconcile;

pub use locator::{appearance_suffix, base_name, locate, scale_suffix};
pub use manifest::{Appearance, Manifest, ManifestEntry, MANIFEST_FILENAME};
pub use pool::SourcePool;
pub use reconcile::{Fingerprint, Reconciler, Reconciliation, SyncOutcome};
