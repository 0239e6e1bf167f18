use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;

use crate::app_state::AppState;

/// POST /api/proxy/ocr — stream one multipart submission to the compliance
/// backend and stream its response back.
///
/// Pure store-and-forward: the body is not inspected or reshaped, and the
/// backend's status and headers come back verbatim. A connectivity failure
/// surfaces as 502 with a plain-text note, never a synthesized verdict body,
/// so the form can tell "backend down" apart from "backend rejected input".
pub async fn forward_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, (StatusCode, String)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    metrics::counter!("relay_requests_total").increment(1);

    let backend = match state.relay.forward(content_type, body).await {
        Ok(response) => response,
        Err(err) => {
            metrics::counter!("relay_failures_total").increment(1);
            tracing::warn!(error = %err, backend_url = state.relay.backend_url(), "relay failed");
            return Err((
                StatusCode::BAD_GATEWAY,
                format!("compliance backend unreachable: {err}"),
            ));
        }
    };

    let status = backend.status();
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;

    // Hop-by-hop headers belong to each transport leg; everything else is
    // copied through untouched.
    for (name, value) in backend.headers() {
        if name == header::CONNECTION || name == header::TRANSFER_ENCODING {
            continue;
        }
        response.headers_mut().append(name.clone(), value.clone());
    }

    *response.body_mut() = Body::from_stream(backend.bytes_stream());

    tracing::debug!(status = %status, "relayed backend response");
    Ok(response)
}
