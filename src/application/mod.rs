//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store access,
//! validation, and business rules. Services stay free of HTTP concerns and
//! provide a clean API for handlers.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short URL creation and resolution
//! - [`services::stats_service::StatsService`] - Click tracking and analytics

pub mod services;
