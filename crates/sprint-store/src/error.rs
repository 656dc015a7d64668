//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing quiz history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history could not be encoded.
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A profile name must contain something other than whitespace.
    #[error("invalid profile name: {0:?}")]
    InvalidProfileName(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
