//! Error types for checksum manifest generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a manifest run.
///
/// Every variant carries enough context (operation and path) to diagnose the
/// failure; none of them is recoverable within a run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to resolve root directory {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error walking the directory at {path:?}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to calculate checksum for {path:?}: {source}")]
    Checksum {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize manifest to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write manifest to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ManifestError {
    /// Convert a walkdir failure into a traversal error, keeping the offending path.
    pub(crate) fn from_walk(err: walkdir::Error, root: &std::path::Path) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        let source = match err.into_io_error() {
            Some(io_err) => io_err,
            None => io::Error::other("filesystem loop detected"),
        };
        ManifestError::Traversal { path, source }
    }
}

/// Errors surfaced by the command-line layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
