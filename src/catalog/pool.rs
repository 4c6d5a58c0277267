//! The flat directory of exported images that catalogs are refreshed from.

use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};

/// A directory of candidate source images, addressed by exact filename.
#[derive(Debug, Clone)]
pub struct SourcePool {
    root: PathBuf,
}

impl SourcePool {
    /// Open a source pool, failing if the directory does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SyncError::Config {
                message: format!("Source directory not found: {}", root.display()),
                help: Some("Pass an existing directory with --source".to_string()),
            });
        }
        Ok(Self { root })
    }

    /// The pool directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file called `name`, if one exists in the pool.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_directory() {
        let dir = tempdir().unwrap();
        let result = SourcePool::open(dir.path().join("nope"));
        assert!(matches!(result, Err(SyncError::Config { .. })));
    }

    #[test]
    fn test_find_exact_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icon.png"), b"png").unwrap();
        let pool = SourcePool::open(dir.path()).unwrap();

        assert_eq!(pool.find("icon.png"), Some(dir.path().join("icon.png")));
        assert_eq!(pool.find("other.png"), None);
    }

    #[test]
    fn test_find_ignores_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();
        let pool = SourcePool::open(dir.path()).unwrap();

        assert_eq!(pool.find("folder.png"), None);
    }
}
