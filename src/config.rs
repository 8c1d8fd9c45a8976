use std::path::PathBuf;

use thiserror::Error;

use crate::infrastructure::repositories::google_sheets_repository::SHEETS_API_BASE;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";
const DEFAULT_STATIC_DIR: &str = "build";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listening port (`PORT`)
    pub port: u16,
    /// Target spreadsheet (`SPREADSHEET_ID`)
    pub spreadsheet_id: String,
    /// Service-account key file (`GOOGLE_CREDENTIALS`)
    pub credentials_path: PathBuf,
    /// Directory holding the built frontend (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Sheets API base URL (`SHEETS_API_BASE`)
    pub sheets_api_base: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let spreadsheet_id = get("SPREADSHEET_ID").ok_or(ConfigError::Missing("SPREADSHEET_ID"))?;

        Ok(Self {
            port,
            spreadsheet_id,
            credentials_path: get("GOOGLE_CREDENTIALS")
                .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string())
                .into(),
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            sheets_api_base: get("SHEETS_API_BASE").unwrap_or_else(|| SHEETS_API_BASE.to_string()),
        })
    }
}
