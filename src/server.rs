//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory store, the log pipeline, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::location::LocationResolver;
use crate::domain::log_event::Package;
use crate::domain::log_sink::LogSink;
use crate::domain::log_worker::run_log_worker;
use crate::domain::logger::Logger;
use crate::infrastructure::geo::HashedLocationResolver;
use crate::infrastructure::logging::TracingLogSink;
use crate::infrastructure::memory::ShortUrlStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory short URL store
/// - Background log worker draining into the tracing sink
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the listen address does not parse, the bind fails,
/// or the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(ShortUrlStore::new());

    let sink: Arc<dyn LogSink> = Arc::new(TracingLogSink::new());
    let (log_tx, log_rx) = mpsc::channel(config.log_queue_capacity);
    tokio::spawn(run_log_worker(log_rx, sink));
    tracing::info!("Log worker started");

    let logger = Logger::new(log_tx);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let code_generator: Arc<dyn CodeGenerator> = Arc::new(RandomCodeGenerator);
    let locations: Arc<dyn LocationResolver> = Arc::new(HashedLocationResolver::new());

    let state = AppState::new(
        store,
        clock,
        code_generator,
        locations,
        logger.clone(),
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    logger.info(
        Package::Service,
        format!("Server started on port {}", addr.port()),
    );

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal(logger))
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal(logger: Logger) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    logger.info(Package::Service, "Server shutting down gracefully");
    tracing::info!("Shutdown signal received");
}
