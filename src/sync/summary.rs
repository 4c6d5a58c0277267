//! Cross-catalog totals for the console report.

use super::CatalogReport;

/// A recorded file with no matching source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFile {
    pub image_set: String,
    pub filename: String,
}

/// Flattened view of every catalog report from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub updated: Vec<String>,
    pub missing: Vec<MissingFile>,
    /// Names of image sets with at least one unassigned entry.
    pub unassigned: Vec<String>,
    pub skipped: Vec<String>,
    pub image_sets: usize,
    pub rewritten_manifests: usize,
}

impl SyncSummary {
    pub fn from_reports(reports: &[CatalogReport]) -> Self {
        let mut summary = Self::default();

        for set in reports.iter().flat_map(|c| &c.image_sets) {
            summary.image_sets += 1;
            if set.manifest_rewritten {
                summary.rewritten_manifests += 1;
            }
            if set.unassigned {
                summary.unassigned.push(set.name.clone());
            }
            summary.updated.extend(set.updated.iter().cloned());
            summary.skipped.extend(set.skipped.iter().cloned());
            summary.missing.extend(set.missing.iter().map(|filename| MissingFile {
                image_set: set.name.clone(),
                filename: filename.clone(),
            }));
        }

        summary
    }

    /// No missing files and no unassigned slots.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unassigned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::ImageSetReport;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn report(name: &str) -> ImageSetReport {
        ImageSetReport {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_reports_flattens_in_order() {
        let reports = vec![
            CatalogReport {
                path: PathBuf::from("Assets.xcassets"),
                image_sets: vec![
                    ImageSetReport {
                        updated: vec!["a.png".into(), "a@2x.png".into()],
                        manifest_rewritten: true,
                        ..report("A.imageset")
                    },
                    ImageSetReport {
                        unassigned: true,
                        missing: vec!["b@3x.png".into()],
                        skipped: vec!["b.png".into()],
                        ..report("B.imageset")
                    },
                ],
            },
            CatalogReport {
                path: PathBuf::from("Media.xcassets"),
                image_sets: vec![ImageSetReport {
                    updated: vec!["c.png".into()],
                    skipped: vec!["c@2x.png".into()],
                    ..report("C.imageset")
                }],
            },
        ];

        let summary = SyncSummary::from_reports(&reports);

        assert_eq!(
            summary,
            SyncSummary {
                updated: vec!["a.png".into(), "a@2x.png".into(), "c.png".into()],
                missing: vec![MissingFile {
                    image_set: "B.imageset".into(),
                    filename: "b@3x.png".into(),
                }],
                unassigned: vec!["B.imageset".into()],
                skipped: vec!["b.png".into(), "c@2x.png".into()],
                image_sets: 3,
                rewritten_manifests: 1,
            }
        );
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_empty_summary_is_complete() {
        let summary = SyncSummary::from_reports(&[]);
        assert_eq!(summary, SyncSummary::default());
        assert!(summary.is_complete());
    }
}
