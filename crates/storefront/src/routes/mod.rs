//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # API
//! GET  /api/ping               - {"message": PING_MESSAGE}
//! GET  /api/demo               - Demo payload
//! ANY  /api/*                  - 404
//!
//! # Single-page app
//! GET  /*                      - Built asset if it exists, else index.html
//! ```

pub mod api;
pub mod spa;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Create the API routes router.
///
/// API responses are never cached.
pub fn api_routes() -> Router<AppState> {
    use axum::http::{HeaderValue, header::CACHE_CONTROL};

    Router::new()
        .route("/ping", get(api::ping))
        .route("/demo", get(api::demo))
        .route("/{*path}", any(api::not_found))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
}

/// Create all routes for the storefront.
///
/// Anything not matched here falls through to the SPA service, which is
/// attached by [`crate::app`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the SPA directory.
async fn health() -> &'static str {
    "ok"
}
