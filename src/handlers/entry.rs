use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{queries, StoreError};
use crate::models::{Entry, EntryPayload};

use super::{AppState, ErrorBody};

type HandlerError = (StatusCode, Json<ErrorBody>);

// Request-per-call: every handler opens its own connection, matching the
// single-statement atomicity the contract promises.
fn open_db(state: &AppState) -> Result<Connection, HandlerError> {
    Connection::open(&state.db_path).map_err(|e| {
        log::warn!("failed to open database {}: {e}", state.db_path.display());
        internal(ErrorBody::with_error("Error opening database", e))
    })
}

fn internal(body: ErrorBody) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, HandlerError> {
    let conn = open_db(&state)?;

    let entries = queries::list_entries(&conn).map_err(|e| {
        log::warn!("list failed: {e}");
        internal(ErrorBody::with_error("Error listing entries", e))
    })?;

    log::debug!("listed {} entries", entries.len());
    Ok(Json(entries))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, HandlerError> {
    let conn = open_db(&state)?;

    match queries::get_entry(&conn, &id) {
        Ok(entry) => Ok(Json(entry)),
        Err(StoreError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::msg(format!("Error finding entry with id {id}"))),
        )),
        Err(e) => {
            log::warn!("get {id} failed: {e}");
            Err(internal(ErrorBody::with_error(
                format!("Error finding entry with id {id}"),
                e,
            )))
        }
    }
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> Result<Json<Entry>, HandlerError> {
    let conn = open_db(&state)?;

    let entry = payload.into_entry(Uuid::new_v4().to_string());
    queries::insert_entry(&conn, &entry).map_err(|e| {
        log::warn!("create failed: {e}");
        internal(ErrorBody::with_error("Error creating entry", e))
    })?;

    log::debug!("created entry {}", entry.id);
    Ok(Json(entry))
}

/// Full replacement: the payload is resolved with the same defaulting as
/// create, so an update that omits `scheduledDate` clears it rather than
/// keeping the stored value.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EntryPayload>,
) -> Result<Json<Entry>, HandlerError> {
    let conn = open_db(&state)?;

    let entry = payload.into_entry(id);
    queries::update_entry(&conn, &entry).map_err(|e| {
        log::warn!("update {} failed: {e}", entry.id);
        internal(ErrorBody::with_error("Error updating", e))
    })?;

    log::debug!("updated entry {}", entry.id);
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    let conn = open_db(&state)?;

    queries::delete_entry(&conn, &id).map_err(|e| {
        log::warn!("delete {id} failed: {e}");
        internal(ErrorBody::msg("Error deleting entry"))
    })?;

    log::debug!("deleted entry {id}");
    Ok(Json(serde_json::json!({ "msg": "Deleted successfully" })))
}
