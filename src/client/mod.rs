//! Programmatic submission client.
//!
//! Applies the same validation rules as the form page, builds the multipart
//! body with the field names the backend expects, and posts it through the
//! forwarding endpoint. Used by the end-to-end tests and usable as a small
//! SDK for scripted submissions.

use garde::Validate;
use reqwest::multipart;
use reqwest::Client;

use crate::models::submission::Submission;
use crate::models::verification::VerificationResult;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation failure; no network call was made.
    #[error("submission failed validation: {0}")]
    Validation(#[from] garde::Report),

    #[error("image content type is not a valid MIME type")]
    InvalidImageType,

    /// The verification endpoint could not be reached.
    #[error("could not reach the verification endpoint: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("verification endpoint returned {status}")]
    Backend {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode the verification result: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct VerifierClient {
    http: Client,
    base_url: String,
}

impl VerifierClient {
    /// `base_url` is the server root, e.g. "http://localhost:3000".
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Validate and submit one label submission, returning the backend's
    /// verdict. Validation failures short-circuit before any network I/O.
    pub async fn submit(&self, submission: &Submission) -> Result<VerificationResult, SubmitError> {
        submission.validate()?;

        let form = build_form(submission)?;
        let response = self
            .http
            .post(format!("{}/api/proxy/ocr", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::Connectivity)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Backend { status, body });
        }

        response.json().await.map_err(SubmitError::Decode)
    }
}

fn build_form(submission: &Submission) -> Result<multipart::Form, SubmitError> {
    let mut form = multipart::Form::new()
        .text("category", submission.category.to_string())
        .text("brandName", submission.brand_name.clone())
        .text("productClass", submission.product_class.clone())
        .text("alcoholContent", submission.alcohol_content.clone());

    if let Some(net_contents) = &submission.net_contents {
        form = form.text("netContents", net_contents.clone());
    }

    // Validation guarantees the image is present.
    if let Some(image) = &submission.image {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(&image.content_type)
            .map_err(|_| SubmitError::InvalidImageType)?;
        form = form.part("image", part);
    }

    Ok(form)
}
