use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use label_verify_web::app_state::AppState;
use label_verify_web::config::AppConfig;
use label_verify_web::routes;
use label_verify_web::services::relay::RelayClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing label-verify-web server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!(
        "relay_requests_total",
        "Total submissions relayed to the compliance backend"
    );
    metrics::describe_counter!(
        "relay_failures_total",
        "Total relay attempts that failed to reach the backend"
    );

    // Initialize the backend relay client
    tracing::info!(backend_url = %config.backend_url, "Initializing compliance backend relay");
    let relay = RelayClient::new(
        &config.backend_url,
        Duration::from_secs(config.backend_timeout_secs),
    )
    .expect("Failed to initialize relay client");

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(relay, config);

    let app = label_verify_web::app(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        );

    tracing::info!("Starting label-verify-web on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
