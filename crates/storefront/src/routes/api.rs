//! Placeholder API endpoints.

use axum::{Json, extract::State, http::Uri};
use clayhouse_core::api::{DemoResponse, PingResponse};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /api/ping`
#[instrument(skip(state))]
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(state.ping().clone())
}

/// `GET /api/demo`
#[instrument(skip(state))]
pub async fn demo(State(state): State<AppState>) -> Json<DemoResponse> {
    Json(state.demo().clone())
}

/// Unknown API paths get a 404 instead of the SPA entry document.
pub async fn not_found(uri: Uri) -> Result<()> {
    tracing::debug!(path = %uri.path(), "Unknown API route");
    Err(AppError::NotFound(uri.path().to_string()))
}
