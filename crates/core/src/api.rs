//! Payloads for the storefront's placeholder API endpoints.
//!
//! Shared between the server and anything that calls it, so both sides agree
//! on field names.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Body of `GET /api/demo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub message: String,
}

impl DemoResponse {
    /// Message served by the demo endpoint.
    pub const MESSAGE: &'static str = "Hello from the Clayhouse server";
}

impl Default for DemoResponse {
    fn default() -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
        }
    }
}
