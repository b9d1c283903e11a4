//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities and the trait seams the rest of the service is wired
//! through, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`clock`] - Time source abstraction for expiry decisions
//! - [`location`] - Client address to region resolution
//! - [`log_event`] - Structured log vocabulary and validation
//! - [`logger`] - Fire-and-forget log submission handle
//! - [`log_sink`] - Delivery target for drained log events
//! - [`log_worker`] - Asynchronous log draining worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Trait seams define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Log Processing Flow
//!
//! 1. A handler submits a [`log_event::LogEvent`] through [`logger::Logger`]
//! 2. The event is queued on a bounded channel without blocking the request
//! 3. [`log_worker::run_log_worker`] drains the queue into a [`log_sink::LogSink`]
//! 4. Events that cannot be queued fall back to a local `tracing` emission

pub mod clock;
pub mod entities;
pub mod location;
pub mod log_event;
pub mod log_sink;
pub mod log_worker;
pub mod logger;
