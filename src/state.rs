//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ShortUrlService, StatsService};
use crate::domain::clock::Clock;
use crate::domain::location::LocationResolver;
use crate::domain::logger::Logger;
use crate::infrastructure::memory::ShortUrlStore;
use crate::utils::code_generator::CodeGenerator;

/// Shared application state.
///
/// Cheap to clone; services are behind [`Arc`] and the logger clones its
/// channel sender.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
    pub stats_service: Arc<StatsService>,
    pub logger: Logger,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Builds the state, wiring both services onto the same store and clock.
    pub fn new(
        store: Arc<ShortUrlStore>,
        clock: Arc<dyn Clock>,
        code_generator: Arc<dyn CodeGenerator>,
        locations: Arc<dyn LocationResolver>,
        logger: Logger,
        base_url: String,
    ) -> Self {
        let short_url_service = Arc::new(ShortUrlService::new(
            store.clone(),
            code_generator,
            clock.clone(),
            base_url,
        ));
        let stats_service = Arc::new(StatsService::new(store, clock.clone(), locations));

        Self {
            short_url_service,
            stats_service,
            logger,
            clock,
        }
    }
}
