//! Error types for tenggat storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// I/O operation on a store file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Replacing the blob with its freshly written temp file failed.
    #[error("Failed to persist {path}: {source}")]
    Persist {
        /// Target file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: tempfile::PersistError,
    },

    /// Failed to serialize the task collection.
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
