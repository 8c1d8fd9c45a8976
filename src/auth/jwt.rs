// JWT assertion creation and verification
// Assertions are RS256-signed and valid for one hour

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthResult;
use super::service_account::ServiceAccountCredentials;

/// Lifetime of a signed assertion in seconds, the maximum Google accepts
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of a service-account assertion
///
/// # Fields
/// * `iss` - Service account email
/// * `scope` - Space-separated OAuth scopes requested
/// * `aud` - Token endpoint the assertion is meant for
/// * `iat` - Issue time (seconds since epoch)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(
        credentials: &ServiceAccountCredentials,
        scope: &str,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            iss: credentials.client_email.clone(),
            scope: scope.to_string(),
            aud: credentials.token_uri.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        }
    }
}

/// Signs an assertion for `credentials` requesting `scope`
///
/// The header carries the key id when the credentials name one, so the
/// token endpoint can pick the right public key.
///
/// # Returns
/// * `Ok(String)` - The compact JWT
/// * `Err(AuthError)` - If signing fails
pub fn create_assertion(
    credentials: &ServiceAccountCredentials,
    key: &EncodingKey,
    scope: &str,
    issued_at: DateTime<Utc>,
) -> AuthResult<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = credentials.private_key_id.clone();

    let claims = Claims::new(credentials, scope, issued_at);

    Ok(encode(&header, &claims, key)?)
}

/// Verifies an assertion against a PEM public key and the expected audience
pub fn verify_assertion(token: &str, public_key_pem: &[u8], audience: &str) -> AuthResult<Claims> {
    let key = DecodingKey::from_rsa_pem(public_key_pem)?;
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[audience]);

    let data = decode::<Claims>(token, &key, &validation)?;
    Ok(data.claims)
}
