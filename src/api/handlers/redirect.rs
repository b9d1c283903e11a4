//! Handler for short URL redirects.

use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::net::SocketAddr;

use crate::domain::log_event::Package;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::referrer_or_direct;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the shortcode, rejecting unknown (404) and expired (410) codes
/// 2. Record the click (referrer, coarse location) before responding
/// 3. Answer `302 Found` with the original URL in `Location`
///
/// # Click Tracking
///
/// The click is appended synchronously so a stats read issued right after
/// the redirect already sees it. A failed append is logged and swallowed;
/// the visitor still gets their redirect.
///
/// # Errors
///
/// Returns 404 Not Found for unknown shortcodes and 410 Gone for expired
/// ones.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let record = state.short_url_service.resolve_active(&code).map_err(|e| {
        state
            .logger
            .warn(Package::Handler, format!("GET /{code}: {e}"));
        e
    })?;

    let referrer = referrer_or_direct(&headers);
    if let Err(e) = state.stats_service.record_click(&code, referrer, addr.ip()) {
        state.logger.error(
            Package::Handler,
            format!("Failed to record click for {code}: {e}"),
        );
    }

    state.logger.info(
        Package::Service,
        format!("URL accessed: {} -> {}", code, record.original_url),
    );

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    ))
}
