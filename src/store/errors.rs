//! Store error types.
//!
//! File-system failures are not recovered locally; they propagate to the
//! HTTP layer where they surface as 500s. A file whose content cannot be
//! decoded is not an error at all — the store resets it to an empty array.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the collection file store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be read.
    #[error("failed to read data file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file (or its parent directory) could not be written.
    #[error("failed to write data file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The in-memory collection could not be encoded as JSON.
    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}
