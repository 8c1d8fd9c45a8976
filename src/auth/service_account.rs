use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::EncodingKey;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::{AuthError, AuthResult};
use super::jwt::create_assertion;

/// OAuth scope granting read/write access to spreadsheets
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Tokens this close to expiry are refreshed before use
const REFRESH_MARGIN_SECS: i64 = 60;

/// Service-account key file as downloaded from the Google console
///
/// Only the fields needed for the JWT bearer flow are read.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountCredentials {
    /// Reads and parses a key file
    pub fn from_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > now
    }
}

/// Authenticated Google session for a service account
///
/// Created once at startup by [`ServiceAccountAuth::authorize`], which fails
/// if the credentials cannot obtain a token. The signing key is fixed after
/// that; access tokens are cached and renewed shortly before they expire.
pub struct ServiceAccountAuth {
    credentials: ServiceAccountCredentials,
    key: EncodingKey,
    http: reqwest::Client,
    scope: String,
    token: Mutex<Option<AccessToken>>,
}

impl ServiceAccountAuth {
    /// Parses the private key and fetches a first access token
    ///
    /// # Returns
    /// * `Ok(ServiceAccountAuth)` - A session holding a valid token
    /// * `Err(AuthError)` - If the key is unusable or the token endpoint refuses
    pub async fn authorize(
        credentials: ServiceAccountCredentials,
        http: reqwest::Client,
        scope: impl Into<String>,
    ) -> AuthResult<Self> {
        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())?;

        let auth = Self {
            credentials,
            key,
            http,
            scope: scope.into(),
            token: Mutex::new(None),
        };

        auth.access_token().await?;
        tracing::info!(account = %auth.client_email(), "Service account authorized");

        Ok(auth)
    }

    pub fn client_email(&self) -> &str {
        &self.credentials.client_email
    }

    /// Returns a valid access token, requesting a new one if needed
    pub async fn access_token(&self) -> AuthResult<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    async fn request_token(&self) -> AuthResult<AccessToken> {
        let issued_at = Utc::now();
        let assertion = create_assertion(&self.credentials, &self.key, &self.scope, issued_at)?;

        tracing::debug!(token_uri = %self.credentials.token_uri, "Requesting access token");
        let response = self
            .http
            .post(&self.credentials.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: TokenResponse = response.json().await?;

        Ok(AccessToken {
            value: body.access_token,
            expires_at: issued_at + Duration::seconds(body.expires_in),
        })
    }
}
