//! Sync command implementation.
//!
//! Refreshes every catalog under the destination root from the source
//! directory and prints the four-group report.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::{Reconciler, SourcePool};
use crate::discovery::{Config, ResolvedPaths};
use crate::error::{Result, SyncError};
use crate::output::{display_path, plural, print_summary, Printer};
use crate::sync::{sync_root, SyncSummary};

/// Copy new and changed images into catalogs and update manifests
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Directory of exported source images
    #[arg(long, short)]
    pub source: Option<PathBuf>,

    /// Directory containing one or more .xcassets catalogs
    #[arg(long, short)]
    pub destination: Option<PathBuf>,

    /// Config file (default: ./assetsync.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Report what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: SyncArgs, printer: &Printer) -> Result<SyncSummary> {
    let config = Config::discover(args.config.as_deref(), &std::env::current_dir()?)?
        .with_overrides(args.source, args.destination);
    let ResolvedPaths {
        source,
        destination,
    } = config.resolve()?;

    if !destination.is_dir() {
        return Err(SyncError::Config {
            message: format!("Destination directory not found: {}", destination.display()),
            help: Some("Pass an existing directory with --destination".to_string()),
        });
    }

    let pool = SourcePool::open(source)?;
    let reconciler = Reconciler::new(&pool).with_dry_run(args.dry_run);

    printer.status("Syncing", &display_path(&destination));
    let reports = sync_root(&destination, &reconciler)?;
    let summary = SyncSummary::from_reports(&reports);

    print_summary(printer, &summary, config.show_skipped);

    if !summary.is_complete() {
        printer.warning(
            "Incomplete",
            &format!(
                "{} missing, {} with unassigned slots",
                plural(summary.missing.len(), "file", "files"),
                plural(summary.unassigned.len(), "image set", "image sets"),
            ),
        );
    }

    let verb = if args.dry_run { "Checked" } else { "Finished" };
    printer.status(
        verb,
        &format!(
            "{} in {} ({} updated, {} rewritten)",
            plural(summary.image_sets, "image set", "image sets"),
            plural(reports.len(), "catalog", "catalogs"),
            summary.updated.len(),
            plural(summary.rewritten_manifests, "manifest", "manifests"),
        ),
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Manifest, ManifestEntry, MANIFEST_FILENAME};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            fs::create_dir_all(dir.path().join("exports")).unwrap();
            let set = dir.path().join("App/Assets.xcassets/AppIcon.appiconset");
            fs::create_dir_all(&set).unwrap();
            Manifest {
                images: vec![
                    ManifestEntry::new("universal", "1x"),
                    ManifestEntry::new("universal", "2x").with_filename("old@2x.png"),
                ],
                info: Some(serde_json::json!({ "author": "xcode", "version": 1 })),
                extra: Default::default(),
            }
            .save(&set.join(MANIFEST_FILENAME))
            .unwrap();
            fs::write(dir.path().join("exports/appicon.png"), b"icon").unwrap();
            Self { dir }
        }

        fn args(&self, dry_run: bool) -> SyncArgs {
            SyncArgs {
                source: Some(self.dir.path().join("exports")),
                destination: Some(self.dir.path().join("App")),
                config: Some(self.config_path()),
                dry_run,
            }
        }

        fn config_path(&self) -> PathBuf {
            let path = self.dir.path().join("assetsync.yaml");
            if !path.exists() {
                fs::write(&path, "show_skipped: true\n").unwrap();
            }
            path
        }

        fn set(&self) -> PathBuf {
            self.dir.path().join("App/Assets.xcassets/AppIcon.appiconset")
        }
    }

    #[test]
    fn test_sync_reports_groups() {
        let project = Project::new();

        let summary = run(project.args(false), &Printer::new()).unwrap();

        assert_eq!(summary.updated, vec!["appicon.png"]);
        assert_eq!(summary.missing.len(), 1);
        assert_eq!(summary.missing[0].image_set, "AppIcon.appiconset");
        assert_eq!(summary.missing[0].filename, "old@2x.png");
        assert!(summary.unassigned.is_empty());
        assert!(!summary.is_complete());
        assert_eq!(summary.rewritten_manifests, 1);
        assert!(project.set().join("appicon.png").is_file());
    }

    #[test]
    fn test_sync_twice_skips_everything() {
        let project = Project::new();
        run(project.args(false), &Printer::new()).unwrap();

        let second = run(project.args(false), &Printer::new()).unwrap();

        assert!(second.updated.is_empty());
        assert_eq!(second.skipped, vec!["appicon.png"]);
        assert_eq!(second.rewritten_manifests, 0);
    }

    #[test]
    fn test_dry_run_leaves_catalog_alone() {
        let project = Project::new();
        let before = fs::read_to_string(project.set().join(MANIFEST_FILENAME)).unwrap();

        let summary = run(project.args(true), &Printer::new()).unwrap();

        assert_eq!(summary.updated, vec!["appicon.png"]);
        assert!(!project.set().join("appicon.png").exists());
        assert_eq!(
            fs::read_to_string(project.set().join(MANIFEST_FILENAME)).unwrap(),
            before
        );
    }

    #[test]
    fn test_missing_destination_option_fails_fast() {
        let project = Project::new();
        let args = SyncArgs {
            destination: None,
            ..project.args(false)
        };

        let result = run(args, &Printer::new());

        assert!(matches!(result, Err(SyncError::Config { .. })));
        assert!(!project.set().join("appicon.png").exists());
    }

    #[test]
    fn test_config_file_supplies_paths() {
        let project = Project::new();
        let config = project.dir.path().join("custom.yaml");
        fs::write(
            &config,
            format!(
                "source: {}\ndestination: {}\n",
                project.dir.path().join("exports").display(),
                project.dir.path().join("App").display()
            ),
        )
        .unwrap();

        let args = SyncArgs {
            source: None,
            destination: None,
            config: Some(config),
            dry_run: false,
        };
        let summary = run(args, &Printer::new()).unwrap();

        assert_eq!(summary.updated, vec!["appicon.png"]);
    }

    #[test]
    fn test_nonexistent_destination() {
        let project = Project::new();
        let args = SyncArgs {
            destination: Some(project.dir.path().join("nope")),
            ..project.args(false)
        };

        assert!(matches!(
            run(args, &Printer::new()),
            Err(SyncError::Config { .. })
        ));
    }
}
