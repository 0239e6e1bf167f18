use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// OCR/compliance backend endpoint the relay forwards submissions to.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Overall timeout for one relayed backend call, in seconds.
    #[serde(default = "default_backend_timeout_secs")]
    pub backend_timeout_secs: u64,

    /// Inbound request body ceiling in bytes. Label scans can be large.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000/ocr".to_string()
}

fn default_backend_timeout_secs() -> u64 {
    120
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
