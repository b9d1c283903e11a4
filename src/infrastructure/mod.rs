//! Infrastructure layer for storage and integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for storage, location resolution, and log
//! delivery.
//!
//! # Modules
//!
//! - [`memory`] - In-memory record and click ledger store
//! - [`geo`] - Hash-based client address to region resolver
//! - [`logging`] - `tracing`-backed log sink

pub mod geo;
pub mod logging;
pub mod memory;
