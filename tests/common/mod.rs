#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::ConnectInfo;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::mpsc;
use tower::Layer;

use snaplink::domain::clock::Clock;
use snaplink::domain::entities::ShortUrl;
use snaplink::domain::log_event::LogEvent;
use snaplink::domain::logger::Logger;
use snaplink::infrastructure::geo::HashedLocationResolver;
use snaplink::infrastructure::memory::ShortUrlStore;
use snaplink::state::AppState;
use snaplink::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://localhost:3001";

/// Fixed starting instant shared by all tests.
pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Clock under test control. Time only moves when `advance` is called.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Builds an application state over a fresh store and a manual clock frozen
/// at [`test_epoch`].
pub fn create_test_state() -> (AppState, Arc<ShortUrlStore>, mpsc::Receiver<LogEvent>) {
    create_test_state_with_clock(Arc::new(ManualClock::starting_at(test_epoch())))
}

/// Builds an application state around a caller-provided clock, so tests can
/// keep a handle and advance time mid-scenario.
pub fn create_test_state_with_clock(
    clock: Arc<dyn Clock>,
) -> (AppState, Arc<ShortUrlStore>, mpsc::Receiver<LogEvent>) {
    let store = Arc::new(ShortUrlStore::new());
    let (tx, rx) = mpsc::channel(100);
    let logger = Logger::new(tx);

    let state = AppState::new(
        store.clone(),
        clock,
        Arc::new(RandomCodeGenerator),
        Arc::new(HashedLocationResolver::new()),
        logger,
        BASE_URL.to_string(),
    );

    (state, store, rx)
}

/// Seeds a record created at [`test_epoch`] with the given validity.
pub fn seed_short_url(store: &ShortUrlStore, code: &str, url: &str, validity_minutes: i64) {
    let created = test_epoch();
    store
        .insert(ShortUrl::new(
            code.to_string(),
            url.to_string(),
            created,
            created + Duration::minutes(validity_minutes),
            validity_minutes,
        ))
        .unwrap();
}

/// Seeds a record whose validity window ended an hour before [`test_epoch`].
pub fn seed_expired_short_url(store: &ShortUrlStore, code: &str, url: &str) {
    let created = test_epoch() - Duration::hours(2);
    store
        .insert(ShortUrl::new(
            code.to_string(),
            url.to_string(),
            created,
            created + Duration::hours(1),
            60,
        ))
        .unwrap();
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
