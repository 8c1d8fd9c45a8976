use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;
use thiserror::Error;

use crate::auth::{AuthError, ServiceAccountAuth};
use crate::domain::repositories::SheetRepository;

/// Default base URL of the Sheets API
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Errors returned by the Sheets API adapter
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Google Sheets implementation of SheetRepository
///
/// Appends rows through `spreadsheets.values.append` with
/// `valueInputOption=USER_ENTERED`, so cells are parsed as if typed
/// into the sheet.
pub struct GoogleSheetsRepository {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
    spreadsheet_id: String,
    api_base: Url,
}

impl GoogleSheetsRepository {
    /// Creates a new GoogleSheetsRepository
    ///
    /// # Arguments
    /// * `http` - Client used for API calls
    /// * `auth` - Authorized service-account session
    /// * `spreadsheet_id` - Target spreadsheet
    /// * `api_base` - Base URL of the Sheets API, normally [`SHEETS_API_BASE`]
    pub fn new(
        http: reqwest::Client,
        auth: ServiceAccountAuth,
        spreadsheet_id: impl Into<String>,
        api_base: &str,
    ) -> Result<Self, SheetsError> {
        let api_base = Url::parse(api_base)
            .map_err(|e| SheetsError::InvalidBaseUrl(format!("{}: {}", api_base, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl(api_base.to_string()));
        }

        Ok(Self {
            http,
            auth,
            spreadsheet_id: spreadsheet_id.into(),
            api_base,
        })
    }

    /// URL of the append call for `range`
    pub fn append_url(&self, range: &str) -> Url {
        let action = format!("{}:append", range);
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                action.as_str(),
            ]);
        }
        url
    }

    async fn append(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), SheetsError> {
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .post(self.append_url(range))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(range, "Rows appended");
        Ok(())
    }
}

#[async_trait]
impl SheetRepository for GoogleSheetsRepository {
    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), String> {
        self.append(range, rows).await.map_err(|e| e.to_string())
    }
}
