//! Cross-origin resource sharing.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allow any origin to call the API.
///
/// The endpoints are public and unauthenticated. Credentials are never
/// allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
