//! Click statistics and analytics service.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::entities::{ClickEvent, ShortUrl};
use crate::domain::location::LocationResolver;
use crate::error::AppError;
use crate::infrastructure::memory::ShortUrlStore;

/// Snapshot of a short URL together with its recorded clicks.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub record: ShortUrl,
    pub total_clicks: usize,
    pub clicks: Vec<ClickEvent>,
}

/// Service for recording clicks and retrieving per-shortcode statistics.
pub struct StatsService {
    store: Arc<ShortUrlStore>,
    clock: Arc<dyn Clock>,
    locations: Arc<dyn LocationResolver>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        store: Arc<ShortUrlStore>,
        clock: Arc<dyn Clock>,
        locations: Arc<dyn LocationResolver>,
    ) -> Self {
        Self {
            store,
            clock,
            locations,
        }
    }

    /// Retrieves statistics for a shortcode.
    ///
    /// Returns the record together with an owned snapshot of its click
    /// ledger, in arrival order. Clicks appended after the snapshot is
    /// taken are not reflected in it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown shortcodes and
    /// [`AppError::Expired`] once the validity window has passed.
    pub fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        let record = self.store.resolve(code, self.clock.now())?;
        let clicks = self.store.clicks(code)?;

        Ok(UrlStats {
            record,
            total_clicks: clicks.len(),
            clicks,
        })
    }

    /// Records a click against a shortcode.
    ///
    /// Stamps the event with the current time and a coarse location derived
    /// from the caller's address. Expiry is not re-checked here; the caller
    /// resolves the shortcode first and the click belongs to that access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the shortcode has no ledger.
    pub fn record_click(
        &self,
        code: &str,
        referrer: String,
        addr: IpAddr,
    ) -> Result<ClickEvent, AppError> {
        let event = ClickEvent::new(self.clock.now(), referrer, self.locations.resolve(addr));
        self.store.append_click(code, event.clone())?;
        Ok(event)
    }
}
