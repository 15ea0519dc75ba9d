//! Application state shared across handlers.

use std::sync::Arc;

use clayhouse_core::api::{DemoResponse, PingResponse};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The storefront keeps no
/// per-user state: carts and favorites live in the browser.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    ping: PingResponse,
    demo: DemoResponse,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let ping = PingResponse {
            message: config.ping_message.clone(),
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                ping,
                demo: DemoResponse::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Body served by `GET /api/ping`.
    #[must_use]
    pub fn ping(&self) -> &PingResponse {
        &self.inner.ping
    }

    /// Body served by `GET /api/demo`.
    #[must_use]
    pub fn demo(&self) -> &DemoResponse {
        &self.inner.demo
    }
}
