//! Short URL entity representing a shortcode to URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL with its validity window.
///
/// Records are immutable once created: expiry is derived at read time from
/// `expires_at`, and expired records are never mutated or removed.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    /// Opaque identifier assigned at creation.
    pub id: Uuid,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: i64,
}

impl ShortUrl {
    /// Creates a new ShortUrl record with a fresh id.
    pub fn new(
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            shortcode,
            original_url,
            created_at,
            expires_at,
            validity_minutes,
        }
    }

    /// Returns true if the record's validity window has passed at `now`.
    ///
    /// A record is still live at exactly `expires_at`; it expires strictly
    /// after that instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
