//! Log sink forwarding events into `tracing`.

use async_trait::async_trait;

use crate::domain::log_event::{Level, LogEvent};
use crate::domain::log_sink::LogSink;

/// Default [`LogSink`] that renders drained events through the process-wide
/// `tracing` subscriber.
///
/// Stands in for a remote log collector; swapping in an HTTP-backed sink
/// only requires another `LogSink` implementation at startup.
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSink for TracingLogSink {
    async fn submit(&self, event: LogEvent) {
        let stack = event.stack.as_str();
        let package = event.package.as_str();

        match event.level {
            Level::Debug => tracing::debug!(stack, package, "{}", event.message),
            Level::Info => tracing::info!(stack, package, "{}", event.message),
            Level::Warn => tracing::warn!(stack, package, "{}", event.message),
            Level::Error | Level::Fatal => tracing::error!(stack, package, "{}", event.message),
        }
    }
}
