//! Field validation for incoming write bodies.
//!
//! Validation runs over the raw `serde_json::Value` body so that a wrong
//! type on one field is reported against that field instead of failing the
//! whole deserialization. All field failures are collected at once — a body
//! missing every field reports every field.
//!
//! Two modes:
//! - full: `action`, `date` and `points` are all required (create, PUT)
//! - partial: only supplied fields are checked (PATCH)
//!
//! A supplied `id` is ignored in both modes; only the server-assigned value
//! is authoritative. Validation never touches the store.

mod errors;

pub use errors::FieldErrors;

use chrono::NaiveDate;
use serde_json::Value;

use crate::model::{ActionPatch, NewAction};

const MAX_ACTION_CHARS: usize = 255;
const DATE_FORMAT: &str = "%Y-%m-%d";

const MSG_REQUIRED: &str = "This field is required.";
const MSG_NOT_A_STRING: &str = "Not a valid string.";
const MSG_BLANK: &str = "This field may not be blank.";
const MSG_TOO_LONG: &str = "Ensure this field has no more than 255 characters.";
const MSG_BAD_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
const MSG_NOT_AN_INTEGER: &str = "A valid integer is required.";
const MSG_NEGATIVE_POINTS: &str = "points must be >= 0";
const MSG_NOT_AN_OBJECT: &str = "Invalid data. Expected a JSON object.";

/// Validate a create / full-update body. All three writable fields are
/// required; on success the normalized fields are returned.
pub fn validate_full(body: &Value) -> Result<NewAction, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(obj) = body.as_object() else {
        errors.push("non_field_errors", MSG_NOT_AN_OBJECT);
        return Err(errors);
    };

    let action = match obj.get("action") {
        Some(value) => check_action(value, &mut errors),
        None => {
            errors.push("action", MSG_REQUIRED);
            None
        }
    };
    let date = match obj.get("date") {
        Some(value) => check_date(value, &mut errors),
        None => {
            errors.push("date", MSG_REQUIRED);
            None
        }
    };
    let points = match obj.get("points") {
        Some(value) => check_points(value, &mut errors),
        None => {
            errors.push("points", MSG_REQUIRED);
            None
        }
    };

    match (action, date, points) {
        (Some(action), Some(date), Some(points)) => errors.into_result(NewAction {
            action,
            date,
            points,
        }),
        _ => Err(errors),
    }
}

/// Validate a partial-update body. Only supplied fields are checked; the
/// resulting patch leaves absent fields untouched on the stored record.
pub fn validate_partial(body: &Value) -> Result<ActionPatch, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(obj) = body.as_object() else {
        errors.push("non_field_errors", MSG_NOT_AN_OBJECT);
        return Err(errors);
    };

    let patch = ActionPatch {
        action: obj.get("action").and_then(|v| check_action(v, &mut errors)),
        date: obj.get("date").and_then(|v| check_date(v, &mut errors)),
        points: obj.get("points").and_then(|v| check_points(v, &mut errors)),
    };

    errors.into_result(patch)
}

/// `action`: a string, trimmed non-empty, at most 255 characters. The
/// trimmed value is what gets stored.
fn check_action(value: &Value, errors: &mut FieldErrors) -> Option<String> {
    let Some(raw) = value.as_str() else {
        errors.push("action", MSG_NOT_A_STRING);
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push("action", MSG_BLANK);
        return None;
    }
    if trimmed.chars().count() > MAX_ACTION_CHARS {
        errors.push("action", MSG_TOO_LONG);
        return None;
    }
    Some(trimmed.to_string())
}

/// `date`: a string holding a complete, valid `YYYY-MM-DD` calendar date.
/// chrono accepts unpadded components, so the parsed date is formatted back
/// and compared to the input to reject values like `2025-1-8` or `2025-01`.
fn check_date(value: &Value, errors: &mut FieldErrors) -> Option<String> {
    let Some(raw) = value.as_str() else {
        errors.push("date", MSG_BAD_DATE);
        return None;
    };
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(parsed) if parsed.format(DATE_FORMAT).to_string() == raw => Some(raw.to_string()),
        _ => {
            errors.push("date", MSG_BAD_DATE);
            None
        }
    }
}

/// `points`: a JSON integer, at least zero. No string or float coercion.
fn check_points(value: &Value, errors: &mut FieldErrors) -> Option<i64> {
    let Some(points) = value.as_i64() else {
        errors.push("points", MSG_NOT_AN_INTEGER);
        return None;
    };
    if points < 0 {
        errors.push("points", MSG_NEGATIVE_POINTS);
        return None;
    }
    Some(points)
}
