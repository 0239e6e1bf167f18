use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::relay::RelayClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayClient>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(relay: RelayClient, config: AppConfig) -> Self {
        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }
}
