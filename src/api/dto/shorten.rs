//! DTOs for the URL shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Fields arrive optional so the service layer can answer missing values
/// with its own messages instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten.
    pub url: Option<String>,

    /// Validity window in minutes. Defaults to 30 when omitted.
    pub validity: Option<i64>,

    /// Optional caller-chosen shortcode. Empty means absent.
    pub shortcode: Option<String>,
}

/// Response for a newly created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Fully qualified short link.
    pub short_link: String,

    /// Moment the link stops resolving.
    pub expiry: DateTime<Utc>,
}
