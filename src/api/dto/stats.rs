//! DTOs for shortcode statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::UrlStats;
use crate::domain::entities::ClickEvent;

/// Detailed statistics for a specific short URL.
///
/// Includes the link metadata, total click count, and every recorded click
/// in arrival order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
    pub original_url: String,
    pub creation_date: DateTime<Utc>,
    pub total_clicks: usize,
    pub click_data: Vec<ClickInfo>,
}

/// A single recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(event: ClickEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            referrer: event.referrer,
            location: event.location,
        }
    }
}

impl StatsResponse {
    /// Builds the response from a stats snapshot and its rendered short link.
    pub fn from_stats(short_link: String, stats: UrlStats) -> Self {
        Self {
            short_link,
            expiry: stats.record.expires_at,
            original_url: stats.record.original_url,
            creation_date: stats.record.created_at,
            total_clicks: stats.total_clicks,
            click_data: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
