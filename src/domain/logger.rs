//! Fire-and-forget handle for submitting structured log events.

use tokio::sync::mpsc;

use crate::domain::log_event::{Level, LogEvent, Package, Stack};

/// Cheap, cloneable producer side of the log pipeline.
///
/// Submission never blocks and never fails into the caller: events go through
/// a bounded channel via `try_send`, and anything that cannot be queued (full
/// queue, stopped worker, invalid vocabulary) falls back to a local `tracing`
/// emission so the line is not lost silently.
#[derive(Clone)]
pub struct Logger {
    tx: mpsc::Sender<LogEvent>,
}

impl Logger {
    pub fn new(tx: mpsc::Sender<LogEvent>) -> Self {
        Self { tx }
    }

    /// Submits a log event for any stack.
    pub fn log(&self, stack: Stack, level: Level, package: Package, message: impl Into<String>) {
        let event = match LogEvent::new(stack, level, package, message) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Dropping invalid log event: {e}");
                return;
            }
        };

        if let Err(err) = self.tx.try_send(event) {
            let event = match err {
                mpsc::error::TrySendError::Full(event) => event,
                mpsc::error::TrySendError::Closed(event) => event,
            };
            emit_local(&event);
        }
    }

    pub fn debug(&self, package: Package, message: impl Into<String>) {
        self.log(Stack::Backend, Level::Debug, package, message);
    }

    pub fn info(&self, package: Package, message: impl Into<String>) {
        self.log(Stack::Backend, Level::Info, package, message);
    }

    pub fn warn(&self, package: Package, message: impl Into<String>) {
        self.log(Stack::Backend, Level::Warn, package, message);
    }

    pub fn error(&self, package: Package, message: impl Into<String>) {
        self.log(Stack::Backend, Level::Error, package, message);
    }

    pub fn fatal(&self, package: Package, message: impl Into<String>) {
        self.log(Stack::Backend, Level::Fatal, package, message);
    }
}

/// Emits an event through `tracing` when the queue is unavailable.
fn emit_local(event: &LogEvent) {
    let stack = event.stack.as_str();
    let package = event.package.as_str();

    match event.level {
        Level::Debug => tracing::debug!(stack, package, "{}", event.message),
        Level::Info => tracing::info!(stack, package, "{}", event.message),
        Level::Warn => tracing::warn!(stack, package, "{}", event.message),
        Level::Error | Level::Fatal => tracing::error!(stack, package, "{}", event.message),
    }
}
