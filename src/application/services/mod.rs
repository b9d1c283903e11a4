//! Business logic services for the application layer.

pub mod short_url_service;
pub mod stats_service;

pub use short_url_service::{CreateShortUrl, ShortUrlService};
pub use stats_service::{StatsService, UrlStats};
