//! HTTP route handlers for the dashboard shell.

pub mod guidance;
pub mod resources;
pub mod session;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::dto::StatusResponse;
use crate::state::AppState;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Configuration visibility, checked once by clients at startup to decide
/// whether to show the credential warning banner.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        configured: state.resolver.is_configured(),
    })
}
