//! Handler for the URL shortening endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::extract::AppJson;
use crate::application::services::CreateShortUrl;
use crate::domain::log_event::Package;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "mycode"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the short link and its expiry:
///
/// ```json
/// {
///   "shortLink": "http://localhost:3001/abc123",
///   "expiry": "2025-06-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on invalid input and 409 Conflict when the
/// requested shortcode is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let record = state
        .short_url_service
        .create_short_url(CreateShortUrl {
            url: payload.url.unwrap_or_default(),
            validity_minutes: payload.validity,
            shortcode: payload.shortcode,
        })
        .map_err(|e| {
            state
                .logger
                .warn(Package::Handler, format!("POST /shorturls: {e}"));
            e
        })?;

    state.logger.info(
        Package::Service,
        format!(
            "URL shortened successfully: {} -> {}",
            record.original_url, record.shortcode
        ),
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link: state.short_url_service.short_link(&record.shortcode),
            expiry: record.expires_at,
        }),
    ))
}
