//! Handler for the health check endpoint.

use axum::Json;
use axum::extract::State;

use crate::api::dto::health::HealthResponse;
use crate::domain::log_event::Package;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// Always `200 OK` while the process is serving requests:
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2025-06-01T12:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    state
        .logger
        .info(Package::Route, "Health check endpoint accessed");

    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: state.clock.now(),
    })
}
