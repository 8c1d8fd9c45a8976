use async_trait::async_trait;

use crate::domain::registration::submission::TeamSubmission;
use crate::domain::repositories::{SubmissionTransport, TransportError};

/// Sends submissions to a running relay as `POST {base}/form`
pub struct HttpFormClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpFormClient {
    /// Creates a client for the relay served at `base_url`
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/form", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpFormClient {
    async fn send(&self, submission: &TeamSubmission) -> Result<(), TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Rejected(status.as_u16()))
        }
    }
}
