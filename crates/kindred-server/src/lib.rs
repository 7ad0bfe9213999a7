//! Dashboard shell: HTTP service wiring the resolver to session-scoped
//! UI state (check-in trend, day counter, journal history).
//!
//! All state is in-memory and resets on process restart. The shell treats
//! the resolver as always-succeeding; the only configuration surface it
//! reads is the one-time `configured` flag for the startup warning banner.

pub mod dto;
mod error;
mod handlers;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

/// Builds the application router. Shared between the binary and the
/// integration tests.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::status))
        .route("/resources", get(handlers::resources::list))
        .route("/session", post(handlers::session::create))
        .route("/session/{id}", get(handlers::session::summary))
        .route("/session/{id}/day", post(handlers::session::add_day))
        .route("/session/{id}/checkin", post(handlers::session::check_in))
        .route("/session/{id}/checkins", get(handlers::session::check_ins))
        .route("/session/{id}/sos", post(handlers::guidance::sos))
        .route(
            "/session/{id}/journal",
            post(handlers::guidance::journal).get(handlers::guidance::journal_history),
        )
        .route("/session/{id}/ask", post(handlers::guidance::ask))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
