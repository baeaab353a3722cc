//! Action HTTP Routes
//!
//! The six CRUD endpoints over the action collection. Each handler is
//! stateless per request: read the whole collection, mutate in memory,
//! write the whole collection back.
//!
//! Every read-modify-write cycle runs inside a single-writer critical
//! section so concurrent requests to this process cannot lose updates.
//! Plain reads take no lock; a writer in another process still wins by
//! last-write (accepted at this scale).
//!
//! On update and delete paths the existence check comes before body
//! validation: a missing id yields 404 even when the payload is also
//! invalid.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::model::Action;
use crate::observability::Logger;
use crate::store::{find_by_id, next_id, FileStore};
use crate::validation::{validate_full, validate_partial};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across the action handlers.
pub struct ActionsState {
    store: FileStore,
    /// Held across read_all -> mutate -> write_all on every write path.
    write_guard: Mutex<()>,
}

impl ActionsState {
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

// ==================
// Action Routes
// ==================

/// Create the action routes, mounted by the server under `/api`.
pub fn action_routes(state: Arc<ActionsState>) -> Router {
    Router::new()
        .route("/actions/", get(list_handler).post(create_handler))
        .route(
            "/actions/{id}/",
            get(get_handler)
                .put(replace_handler)
                .patch(merge_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// The original router only matched integer ids, so a non-integer segment
/// never reached a handler; a path rejection maps to 404 accordingly.
fn extract_id(id: Result<Path<u64>, PathRejection>) -> ApiResult<u64> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::NotFound),
    }
}

fn extract_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
    }
}

// ==================
// Collection Handlers
// ==================

/// GET /actions/ - full collection, even if empty.
async fn list_handler(State(state): State<Arc<ActionsState>>) -> ApiResult<Json<Vec<Action>>> {
    let records = state.store.read_all()?;
    Ok(Json(records))
}

/// POST /actions/ - validate, assign the next id, append, persist.
async fn create_handler(
    State(state): State<Arc<ActionsState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Action>)> {
    let body = extract_body(body)?;
    let fields = validate_full(&body)?;

    let _guard = state.write_guard.lock().await;
    let mut records = state.store.read_all()?;
    let record = fields.into_action(next_id(&records));
    records.push(record.clone());
    state.store.write_all(&records)?;

    Logger::info("action_created", &[("id", &record.id.to_string())]);
    Ok((StatusCode::CREATED, Json(record)))
}

// ==================
// Single-Record Handlers
// ==================

/// GET /actions/{id}/ - one record or 404.
async fn get_handler(
    State(state): State<Arc<ActionsState>>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Action>> {
    let id = extract_id(id)?;
    let records = state.store.read_all()?;
    let idx = find_by_id(&records, id).ok_or(ApiError::NotFound)?;
    Ok(Json(records[idx].clone()))
}

/// PUT /actions/{id}/ - full replacement; all fields required, id kept.
async fn replace_handler(
    State(state): State<Arc<ActionsState>>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Action>> {
    let id = extract_id(id)?;

    let _guard = state.write_guard.lock().await;
    let mut records = state.store.read_all()?;
    let idx = find_by_id(&records, id).ok_or(ApiError::NotFound)?;

    let body = extract_body(body)?;
    let fields = validate_full(&body)?;

    let record = fields.into_action(id);
    records[idx] = record.clone();
    state.store.write_all(&records)?;

    Logger::info("action_replaced", &[("id", &id.to_string())]);
    Ok(Json(record))
}

/// PATCH /actions/{id}/ - merge only the supplied fields.
async fn merge_handler(
    State(state): State<Arc<ActionsState>>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Action>> {
    let id = extract_id(id)?;

    let _guard = state.write_guard.lock().await;
    let mut records = state.store.read_all()?;
    let idx = find_by_id(&records, id).ok_or(ApiError::NotFound)?;

    let body = extract_body(body)?;
    let patch = validate_partial(&body)?;

    patch.apply_to(&mut records[idx]);
    let record = records[idx].clone();
    state.store.write_all(&records)?;

    Logger::info("action_merged", &[("id", &id.to_string())]);
    Ok(Json(record))
}

/// DELETE /actions/{id}/ - remove permanently; the id is never reassigned
/// while higher ids remain.
async fn delete_handler(
    State(state): State<Arc<ActionsState>>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = extract_id(id)?;

    let _guard = state.write_guard.lock().await;
    let mut records = state.store.read_all()?;
    let idx = find_by_id(&records, id).ok_or(ApiError::NotFound)?;

    records.remove(idx);
    state.store.write_all(&records)?;

    Logger::info("action_deleted", &[("id", &id.to_string())]);
    Ok(StatusCode::NO_CONTENT)
}
