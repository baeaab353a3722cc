//! Whole-file JSON store for the action collection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Action;

use super::errors::{StoreError, StoreResult};

const EMPTY_COLLECTION: &str = "[]";

/// A store that persists the full collection as one JSON array file.
///
/// The struct owns only the path; every operation opens the file fresh.
/// Writes are full overwrites and are not atomic with respect to
/// concurrent readers — last write wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given data file path. The file itself is
    /// created lazily on first read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the underlying data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection from disk.
    ///
    /// A missing file is initialized to an empty array first. Content that
    /// fails to decode as an array of records is overwritten with an empty
    /// array and an empty collection is returned; the caller never sees a
    /// corruption error. This keeps the service available at the cost of
    /// silently discarding a corrupt file.
    pub fn read_all(&self) -> StoreResult<Vec<Action>> {
        self.ensure_file()?;

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(_) => {
                self.reset()?;
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the full collection and overwrite the data file.
    pub fn write_all(&self, records: &[Action]) -> StoreResult<()> {
        let encoded = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, encoded).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Create the data file as an empty array if it does not exist yet,
    /// including any missing parent directories.
    pub fn ensure_file(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        self.reset()
    }

    fn reset(&self) -> StoreResult<()> {
        fs::write(&self.path, EMPTY_COLLECTION).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
