use async_trait::async_trait;
use thiserror::Error;

use crate::domain::registration::submission::TeamSubmission;

/// Errors a form can observe when sending a submission
///
/// The form does not distinguish between them; any error ends in
/// the `Error` status.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("Submission rejected with status {0}")]
    Rejected(u16),
}

/// Delivers a validated submission to the relay
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, submission: &TeamSubmission) -> Result<(), TransportError>;
}
