use thiserror::Error;

/// Errors that can occur while authenticating against Google
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read credentials file: {0}")]
    CredentialsIo(#[from] std::io::Error),

    #[error("Malformed credentials: {0}")]
    CredentialsFormat(#[from] serde_json::Error),

    #[error("Failed to sign assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Token request failed: {0}")]
    TokenRequest(#[from] reqwest::Error),

    #[error("Token endpoint rejected assertion with status {status}: {body}")]
    TokenRejected { status: u16, body: String },
}

pub type AuthResult<T> = Result<T, AuthError>;
