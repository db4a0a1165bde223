//! Ranking client: the single point of entry for calls to the external ranking service.
//!
//! No other module talks to the ranking endpoint directly. `AppState` carries an
//! `Arc<dyn Ranker>` so the orchestrator can be exercised without a network.
//!
//! One request per screening: no retries, no partial results. Any non-2xx status or a
//! body that is not a JSON array of candidate records fails the whole batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::candidate::RawCandidate;
use crate::models::upload::UploadedFile;

/// Multipart field carrying the job description text.
pub const JOB_DESC_FIELD: &str = "job_desc";
/// Repeated multipart field carrying one resume per part.
pub const FILES_FIELD: &str = "files";

#[derive(Debug, Error)]
pub enum RankError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything one ranking call needs. File bodies are reference-counted `Bytes`,
/// so building a request from session state does not copy resume contents.
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub job_description: String,
    pub files: Vec<UploadedFile>,
}

#[async_trait]
pub trait Ranker: Send + Sync {
    async fn rank(&self, request: RankRequest) -> Result<Vec<RawCandidate>, RankError>;
}

/// Ranker backed by the HTTP ranking service (`POST <endpoint>` with a multipart body).
#[derive(Clone)]
pub struct HttpRanker {
    client: Client,
    endpoint: String,
}

impl HttpRanker {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RankError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_form(request: RankRequest) -> Result<Form, RankError> {
    let mut form = Form::new().text(JOB_DESC_FIELD, request.job_description);
    for file in request.files {
        // Only the essence is forwarded; declared parameters may not parse as a MIME type.
        let part = Part::bytes(file.data.to_vec())
            .mime_str(&file.essence())?
            .file_name(file.name);
        form = form.part(FILES_FIELD, part);
    }
    Ok(form)
}

#[async_trait]
impl Ranker for HttpRanker {
    async fn rank(&self, request: RankRequest) -> Result<Vec<RawCandidate>, RankError> {
        let file_count = request.files.len();
        let form = build_form(request)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RankError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let candidates: Vec<RawCandidate> = serde_json::from_str(&body)?;

        debug!(
            files = file_count,
            candidates = candidates.len(),
            "Ranking call succeeded"
        );

        Ok(candidates)
    }
}
