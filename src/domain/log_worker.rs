//! Background worker draining queued log events into the sink.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::log_event::LogEvent;
use crate::domain::log_sink::LogSink;

/// Drains the log queue until every [`Logger`](crate::domain::logger::Logger)
/// handle is dropped, forwarding each event to the sink in submission order.
///
/// Spawned once at startup. Sink delivery is awaited here, off the request
/// path, so slow sinks only ever delay other log events.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEvent>, sink: Arc<dyn LogSink>) {
    while let Some(event) = rx.recv().await {
        sink.submit(event).await;
    }
}
