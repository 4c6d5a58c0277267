use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    #[diagnostic(code(assetsync::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(assetsync::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error in {path}: {message}")]
    #[diagnostic(code(assetsync::manifest))]
    Manifest {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(assetsync::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SyncError {
    /// Wrap an IO failure with the path it concerns.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
