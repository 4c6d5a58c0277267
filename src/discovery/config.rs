//! Project configuration (assetsync.yaml) parsing.
//!
//! The config file supplies defaults for the source and destination
//! directories. Command-line options always take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// The name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "assetsync.yaml";

/// Configuration loaded from assetsync.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of exported images.
    pub source: Option<PathBuf>,

    /// Directory containing one or more `.xcassets` catalogs.
    pub destination: Option<PathBuf>,

    /// Whether to list skipped files in the report.
    #[serde(default = "default_show_skipped")]
    pub show_skipped: bool,
}

fn default_show_skipped() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            destination: None,
            show_skipped: default_show_skipped(),
        }
    }
}

/// Fully resolved paths for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Config {
    /// Load config from a yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SyncError::io(path, "Failed to read config", e))?;

        Self::parse(&content)
    }

    /// Load the config file at `explicit`, or `assetsync.yaml` in `dir` if present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SyncError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Overlay command-line values, which win over the file.
    pub fn with_overrides(mut self, source: Option<PathBuf>, destination: Option<PathBuf>) -> Self {
        if source.is_some() {
            self.source = source;
        }
        if destination.is_some() {
            self.destination = destination;
        }
        self
    }

    /// Require both paths, failing before any processing starts.
    pub fn resolve(&self) -> Result<ResolvedPaths> {
        let source = self.source.clone().ok_or_else(|| SyncError::Config {
            message: "No source directory given".to_string(),
            help: Some(format!(
                "Pass --source <dir> or set `source` in {}",
                CONFIG_FILENAME
            )),
        })?;
        let destination = self.destination.clone().ok_or_else(|| SyncError::Config {
            message: "No destination directory given".to_string(),
            help: Some(format!(
                "Pass --destination <dir> or set `destination` in {}",
                CONFIG_FILENAME
            )),
        })?;

        Ok(ResolvedPaths {
            source,
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
source: design/exports
destination: App/Resources
show_skipped: false
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.source, Some(PathBuf::from("design/exports")));
        assert_eq!(config.destination, Some(PathBuf::from("App/Resources")));
        assert!(!config.show_skipped);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.show_skipped);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("source: [unclosed");
        assert!(matches!(result, Err(SyncError::Config { .. })));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            source: Some(PathBuf::from("a")),
            destination: Some(PathBuf::from("b")),
            ..Default::default()
        }
        .with_overrides(Some(PathBuf::from("cli")), None);

        assert_eq!(config.source, Some(PathBuf::from("cli")));
        assert_eq!(config.destination, Some(PathBuf::from("b")));
    }

    #[test]
    fn test_resolve_requires_both_paths() {
        let missing_source = Config::default().with_overrides(None, Some(PathBuf::from("d")));
        assert!(matches!(
            missing_source.resolve(),
            Err(SyncError::Config { .. })
        ));

        let missing_dest = Config::default().with_overrides(Some(PathBuf::from("s")), None);
        assert!(matches!(missing_dest.resolve(), Err(SyncError::Config { .. })));

        let both = Config::default()
            .with_overrides(Some(PathBuf::from("s")), Some(PathBuf::from("d")))
            .resolve()
            .unwrap();
        assert_eq!(both.source, PathBuf::from("s"));
        assert_eq!(both.destination, PathBuf::from("d"));
    }

    #[test]
    fn test_discover_finds_default_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "source: exports\n").unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("exports")));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_explicit_missing_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("custom.yaml");
        assert!(Config::discover(Some(&missing), dir.path()).is_err());
    }
}
