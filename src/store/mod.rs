//! Collection persistence for ecotrack.
//!
//! The store holds the canonical persistent state of the whole collection:
//! a single JSON file containing an ordered array of action records. There
//! is no indexing, no journaling, and no partial write — every operation is
//! load the whole file, mutate in memory, write the whole file back.
//!
//! # Design Principles
//!
//! - Whole-file read-modify-write, last write wins
//! - Missing file is created as an empty array on first read
//! - Undecodable content is reset to an empty array (silent, lossy recovery)
//! - Ids are `max(existing) + 1`, never reused while higher ids remain

mod errors;
mod file;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;

use crate::model::Action;

/// Compute the next id for a new record: 1 for an empty collection,
/// otherwise one past the current maximum.
///
/// Because this derives purely from the current contents, deleting the
/// record with the highest id lowers the next id again; deleting the only
/// record resets it to 1. Documented behavior, not a bug.
pub fn next_id(records: &[Action]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

/// Linear scan for the first record with the given id, returning its
/// position in the collection.
pub fn find_by_id(records: &[Action], id: u64) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}
