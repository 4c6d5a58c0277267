//! Brings one image set in line with the source pool.
//!
//! Every manifest entry is resolved through the locator and classified.
//! Files are copied in when new or changed, replaced files are removed, and
//! `Contents.json` is written back once if any entry's filename changed.

use std::fs;
use std::path::Path;

use filetime::FileTime;
use tracing::debug;

use crate::error::{Result, SyncError};

use super::locator::locate;
use super::manifest::{Manifest, ManifestEntry, MANIFEST_FILENAME};
use super::pool::SourcePool;

/// What happened to a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No filename on record and no source image found.
    Unassigned,
    /// A filename is on record but no source image was found for it.
    Missing(String),
    /// A new or changed source image was copied in.
    Updated(String),
    /// The image set already holds an identical copy.
    Skipped(String),
}

/// Result of reconciling one image set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Image set directory name, e.g. `Logo.imageset`.
    pub image_set: String,
    /// One outcome per manifest entry, in manifest order.
    pub outcomes: Vec<SyncOutcome>,
    /// Whether `Contents.json` was (or in a dry run, would be) rewritten.
    pub manifest_rewritten: bool,
}

/// Size and modification time used to decide whether a copy is current.
///
/// Two files with equal fingerprints are treated as identical even if
/// their bytes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    pub size: u64,
    /// Modification time in milliseconds, rounded to nearest.
    pub mtime_ms: i64,
}

impl Fingerprint {
    pub fn of(path: &Path) -> Result<Self> {
        let metadata =
            fs::metadata(path).map_err(|e| SyncError::io(path, "Failed to stat file", e))?;
        let mtime = FileTime::from_last_modification_time(&metadata);

        Ok(Self {
            size: metadata.len(),
            mtime_ms: round_to_millis(mtime),
        })
    }
}

fn round_to_millis(time: FileTime) -> i64 {
    time.unix_seconds() * 1000 + (i64::from(time.nanoseconds()) + 500_000) / 1_000_000
}

/// Reconciles image sets against a source pool.
pub struct Reconciler<'a> {
    pool: &'a SourcePool,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(pool: &'a SourcePool) -> Self {
        Self {
            pool,
            dry_run: false,
        }
    }

    /// Classify entries without touching the filesystem.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reconcile the image set at `image_set_path`.
    pub fn reconcile(&self, image_set_path: &Path) -> Result<Reconciliation> {
        let image_set = image_set_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let manifest_path = image_set_path.join(MANIFEST_FILENAME);
        let mut manifest = Manifest::load(&manifest_path)?;

        let mut outcomes = Vec::with_capacity(manifest.images.len());
        let mut renamed = false;

        for entry in manifest.images.iter_mut() {
            let before = entry.filename.clone();
            let outcome = self.reconcile_entry(image_set_path, &image_set, entry)?;
            renamed |= entry.filename != before;
            outcomes.push(outcome);
        }

        if renamed && !self.dry_run {
            debug!(image_set = %image_set, "rewriting manifest");
            manifest.save(&manifest_path)?;
        }

        Ok(Reconciliation {
            image_set,
            outcomes,
            manifest_rewritten: renamed,
        })
    }

    fn reconcile_entry(
        &self,
        dir: &Path,
        image_set: &str,
        entry: &mut ManifestEntry,
    ) -> Result<SyncOutcome> {
        let old_path = entry.filename.as_ref().map(|f| dir.join(f));

        let Some(new_path) = locate(image_set, self.pool, entry) else {
            return Ok(match &entry.filename {
                None => {
                    debug!(image_set, idiom = ?entry.idiom, "unassigned");
                    SyncOutcome::Unassigned
                }
                Some(recorded) => {
                    debug!(image_set, file = %recorded, "missing from source");
                    SyncOutcome::Missing(recorded.clone())
                }
            });
        };

        let new_name = new_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = dir.join(&new_name);

        match old_path {
            Some(old) if old.file_name() == new_path.file_name() => {
                if old.is_file() && Fingerprint::of(&old)? == Fingerprint::of(&new_path)? {
                    debug!(image_set, file = %new_name, "unchanged");
                    return Ok(SyncOutcome::Skipped(new_name));
                }
            }
            old => {
                if let Some(old) = old.filter(|p| p.is_file()) {
                    debug!(image_set, file = %old.display(), "removing replaced image");
                    if !self.dry_run {
                        fs::remove_file(&old).map_err(|e| {
                            SyncError::io(&old, &format!("Failed to delete from {}", image_set), e)
                        })?;
                    }
                }
                entry.filename = Some(new_name.clone());
            }
        }

        debug!(image_set, file = %new_name, "copying");
        if !self.dry_run {
            copy_preserving_times(&new_path, &dest, image_set)?;
        }

        Ok(SyncOutcome::Updated(new_name))
    }
}

/// Copy `src` to `dest`, carrying over access and modification times.
fn copy_preserving_times(src: &Path, dest: &Path, image_set: &str) -> Result<()> {
    let context = format!("Failed to copy into {}", image_set);

    let metadata = fs::metadata(src).map_err(|e| SyncError::io(src, &context, e))?;
    fs::copy(src, dest).map_err(|e| SyncError::io(dest, &context, e))?;

    filetime::set_file_times(
        dest,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .map_err(|e| SyncError::io(dest, &context, e))
}
