//! Sink trait for delivering log events.

use crate::domain::log_event::LogEvent;
use async_trait::async_trait;

/// Destination for drained log events.
///
/// The background worker ([`crate::domain::log_worker::run_log_worker`])
/// hands each queued event to the sink. Delivery is best-effort:
/// implementations must swallow their own failures rather than surface them,
/// since nothing upstream will retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::TracingLogSink`] - forwards into `tracing`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn submit(&self, event: LogEvent);
}
