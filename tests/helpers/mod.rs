//! Shared utilities for the integration tests: ephemeral servers, a mock
//! compliance backend, and canned submissions.

#![allow(dead_code)]

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};

use label_verify_web::app_state::AppState;
use label_verify_web::config::AppConfig;
use label_verify_web::models::submission::{BeverageCategory, LabelImage, Submission};
use label_verify_web::services::relay::RelayClient;

/// Minimal PNG-looking bytes. The relay never sniffs the payload, so the
/// content only needs to be stable, not decodable.
pub const TINY_PNG: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x00,
];

/// Serve a router on an ephemeral port, returning its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });
    format!("http://{addr}")
}

/// Build the full application wired to the given backend endpoint.
pub fn relay_app(backend_url: &str) -> Router {
    let config: AppConfig = envy::from_iter(vec![(
        "BACKEND_URL".to_string(),
        backend_url.to_string(),
    )])
    .expect("failed to build test config");

    let relay = RelayClient::new(&config.backend_url, Duration::from_secs(10))
        .expect("failed to build relay client");

    label_verify_web::app(AppState::new(relay, config))
}

/// Reserve a port that nothing listens on, for backend-down scenarios.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{addr}/ocr")
}

/// Mock backend that answers `/ocr` with a fixed status, header set, and body.
pub fn mock_backend(status: StatusCode, headers: HeaderMap, body: String) -> Router {
    Router::new().route(
        "/ocr",
        post(move || {
            let headers = headers.clone();
            let body = body.clone();
            async move { (status, headers, body) }
        }),
    )
}

/// Mock backend that answers with a JSON verdict plus a marker header.
pub fn verdict_backend(verdict: serde_json::Value) -> Router {
    Router::new().route(
        "/ocr",
        post(move || {
            let verdict = verdict.clone();
            async move { ([("x-ocr-engine", "vision-mock")], Json(verdict)) }
        }),
    )
}

/// Mock backend that echoes the received body length, for streaming tests.
pub fn echo_length_backend() -> Router {
    Router::new()
        .route("/ocr", post(|body: Bytes| async move { body.len().to_string() }))
        .layer(axum::extract::DefaultBodyLimit::max(256 * 1024 * 1024))
}

/// Mock backend that echoes the inbound Content-Type header as its body.
pub fn echo_content_type_backend() -> Router {
    Router::new().route(
        "/ocr",
        post(|headers: HeaderMap| async move {
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("")
                .to_string()
        }),
    )
}

/// A well-formed bourbon submission matching the Old Tom fixture.
pub fn old_tom_submission() -> Submission {
    Submission {
        category: BeverageCategory::Auto,
        brand_name: "Old Tom Distillery".to_string(),
        product_class: "Kentucky Straight Bourbon Whiskey".to_string(),
        alcohol_content: "45".to_string(),
        net_contents: Some("750 mL".to_string()),
        image: Some(LabelImage {
            filename: "old-tom-bourbon.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: TINY_PNG.to_vec(),
        }),
    }
}
