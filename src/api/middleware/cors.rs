//! CORS middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS middleware.
///
/// The API is meant to sit behind arbitrary front ends during development,
/// so any origin, method, and header are allowed.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
