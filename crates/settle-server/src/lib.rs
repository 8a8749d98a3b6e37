//! # settle-server
//!
//! HTTP job coordinator, exposed over HTTP: accepts an upload, spawns a
//! background worker per job, and exposes status polling and report
//! download. Router assembly mirrors `datasynth-server`'s own layering of
//! tracing, timeout, and CORS middleware over its route table.

pub mod config;
pub mod dto;
pub mod error;
pub mod filename;
pub mod handlers;
pub mod job_table;
pub mod state;
pub mod worker;

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;

/// Assemble the full route table over `state`. CORS is wide open
/// (`CorsLayer::permissive()`), matching the reference implementation's
/// blanket `flask_cors.CORS`.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/api/upload-file", post(handlers::upload_file))
        .route(
            "/api/processing-status/:id",
            get(handlers::processing_status),
        )
        .route("/api/generate-report", post(handlers::generate_report))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
