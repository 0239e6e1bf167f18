//! TTB Label Verification front end
//!
//! Serves the single-page submission form and relays multipart label
//! submissions to the external OCR/compliance backend without touching the
//! bytes. The compliance logic itself lives in the backend; this crate is
//! presentation and transport glue.

pub mod app_state;
pub mod client;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use app_state::AppState;

/// Build the HTTP surface: the embedded form page, the health probe, and
/// the forwarding endpoint.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Static UI (embedded at compile time)
        .route("/", get(|| async { Html(include_str!("../static/index.html")) }))
        .route("/health", get(routes::health::health_check))
        .route("/api/proxy/ocr", post(routes::proxy::forward_submission))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(body_limit))
}
