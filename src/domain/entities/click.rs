//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is followed.
///
/// `referrer` is never empty: requests without a referrer header are recorded
/// with the `"Direct"` sentinel. `location` is a coarse region tag resolved
/// from the client address.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(timestamp: DateTime<Utc>, referrer: String, location: String) -> Self {
        Self {
            timestamp,
            referrer,
            location,
        }
    }
}
