//! Click metadata extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Referrer recorded when the request carries no usable referrer header.
pub const DIRECT_REFERRER: &str = "Direct";

/// Extracts the referrer for click tracking.
///
/// Checks the standard `Referer` header first, then the alternate `Referrer`
/// spelling some clients send. Missing, empty, or non-UTF-8 values all fall
/// back to [`DIRECT_REFERRER`].
pub fn referrer_or_direct(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .or_else(|| headers.get("referrer"))
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(DIRECT_REFERRER)
        .to_string()
}
