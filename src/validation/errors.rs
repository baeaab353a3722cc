//! Field-keyed validation errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// An ordered mapping from field name to one or more human-readable error
/// messages. Serialized flat, so the wire body of a 400 is exactly
/// `{"points": ["points must be >= 0"]}`.
///
/// BTreeMap keeps the ordering deterministic; the writable field names
/// happen to already sort as `action`, `date`, `points`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(flatten)]
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded against one field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Turn a collected error set into a result: `Ok(value)` when nothing
    /// was recorded, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "validation failed on: {}", fields.join(", "))
    }
}
