//! # SnapLink
//!
//! An in-memory URL shortening service with click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, the clock and
//!   location seams, and the structured log pipeline
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, location
//!   resolution, and the tracing log sink
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short URL creation with optional custom shortcodes and validity windows
//! - Per-click analytics: timestamp, referrer, and coarse location
//! - Expiry enforcement: expired links answer 410 Gone everywhere
//! - Structured log events drained by a background worker
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything is optional; these are the defaults
//! export LISTEN="0.0.0.0:3001"
//! export BASE_URL="http://localhost:3001"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortUrlService, StatsService};
    pub use crate::domain::entities::{ClickEvent, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
