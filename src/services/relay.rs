use std::time::Duration;

use axum::body::Body;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Health probes must answer faster than a full relayed upload, so they get
/// their own ceiling rather than `BACKEND_TIMEOUT_SECS`.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the external OCR/compliance backend. Holds one connection
/// pool; shared across all relayed requests.
pub struct RelayClient {
    http: Client,
    backend_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("could not reach the compliance backend: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("failed to build relay HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl RelayClient {
    pub fn new(backend_url: &str, timeout: Duration) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(RelayError::Build)?;

        Ok(Self {
            http,
            backend_url: backend_url.to_string(),
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Forward one multipart submission to the backend. The inbound body
    /// stream is piped straight into the outbound request, so large uploads
    /// never sit fully in memory. The body is never parsed here; the
    /// multipart boundary travels in the Content-Type header.
    ///
    /// If the client aborts, the inbound stream ends and the outbound
    /// connection terminates with it.
    pub async fn forward(
        &self,
        content_type: &str,
        body: Body,
    ) -> Result<reqwest::Response, RelayError> {
        self.http
            .post(&self.backend_url)
            .header(CONTENT_TYPE, content_type)
            .body(reqwest::Body::wrap_stream(body.into_data_stream()))
            .send()
            .await
            .map_err(RelayError::Connect)
    }

    /// Reachability probe for the health endpoint. Any HTTP response counts
    /// as reachable; only a transport failure does not.
    pub async fn ping(&self) -> Result<(), RelayError> {
        self.http
            .get(&self.backend_url)
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map(|_| ())
            .map_err(RelayError::Connect)
    }
}
