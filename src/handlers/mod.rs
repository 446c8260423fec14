use std::path::PathBuf;

use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;

pub mod entry;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// JSON failure body: `msg` always, `error` carries the stringified storage
/// error for create/update failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            error: None,
        }
    }

    pub fn with_error(msg: impl Into<String>, error: impl ToString) -> Self {
        Self {
            msg: msg.into(),
            error: Some(error.to_string()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get/", get(entry::list_entries))
        .route("/get/{id}", get(entry::get_entry))
        .route("/create/", post(entry::create_entry))
        .route("/update/{id}", put(entry::update_entry))
        .route("/delete/{id}", delete(entry::delete_entry))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
