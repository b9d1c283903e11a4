//! Fallback handler for unmatched routes.

use axum::extract::State;
use axum::http::{Method, Uri};
use serde_json::json;

use crate::domain::log_event::Package;
use crate::error::AppError;
use crate::state::AppState;

/// Answers any unmatched route with a 404 error envelope.
pub async fn fallback_handler(State(state): State<AppState>, method: Method, uri: Uri) -> AppError {
    state.logger.warn(
        Package::Route,
        format!("404 - Route not found: {} {}", method, uri.path()),
    );

    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
