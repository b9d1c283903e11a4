//! Handler for short URL statistics.

use axum::Json;
use axum::extract::{Path, State};

use crate::api::dto::stats::StatsResponse;
use crate::domain::log_event::Package;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short URL.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// Returns the short link, expiry, original URL, creation date, total click
/// count, and every recorded click in arrival order.
///
/// # Errors
///
/// Returns 404 Not Found for unknown shortcodes and 410 Gone for expired
/// ones. Expired links keep their history but no longer serve it.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).map_err(|e| {
        state
            .logger
            .warn(Package::Handler, format!("GET /shorturls/{code}: {e}"));
        e
    })?;

    state.logger.info(
        Package::Service,
        format!("Statistics retrieved for shortcode: {code}"),
    );

    let short_link = state.short_url_service.short_link(&code);
    Ok(Json(StatsResponse::from_stats(short_link, stats)))
}
