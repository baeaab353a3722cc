//! The action record and its validated write shapes.
//!
//! `Action` is the sole entity: one sustainability action with a
//! server-assigned integer id. The `date` field is stored as text in
//! `YYYY-MM-DD` form; validation guarantees it is a real calendar date
//! before it ever reaches the store.

use serde::{Deserialize, Serialize};

/// One sustainability action as persisted in the collection file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Server-assigned, unique, immutable after creation.
    pub id: u64,
    /// What was done, trimmed, non-empty, at most 255 characters.
    pub action: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Non-negative point score.
    pub points: i64,
}

/// A fully validated set of writable fields, ready to become an `Action`
/// once an id is attached (create) or reattached (full update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub action: String,
    pub date: String,
    pub points: i64,
}

impl NewAction {
    /// Attach an id, producing a complete record.
    pub fn into_action(self, id: u64) -> Action {
        Action {
            id,
            action: self.action,
            date: self.date,
            points: self.points,
        }
    }
}

/// A validated partial update. Absent fields leave the stored record
/// untouched; `id` is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPatch {
    pub action: Option<String>,
    pub date: Option<String>,
    pub points: Option<i64>,
}

impl ActionPatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.date.is_none() && self.points.is_none()
    }

    /// Merge the supplied fields into an existing record in place.
    pub fn apply_to(&self, record: &mut Action) {
        if let Some(action) = &self.action {
            record.action = action.clone();
        }
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(points) = self.points {
            record.points = points;
        }
    }
}
