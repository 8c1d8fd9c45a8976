use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use hackathon_registration::api::{self, AppState};
use hackathon_registration::auth::{
    AuthError, ServiceAccountAuth, ServiceAccountCredentials, SPREADSHEETS_SCOPE,
};
use hackathon_registration::config::{AppConfig, ConfigError};
use hackathon_registration::infrastructure::repositories::{GoogleSheetsRepository, SheetsError};

#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Google authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Sheets client error: {0}")]
    Sheets(#[from] SheetsError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    // Authenticate once; no listener is bound unless this succeeds
    tracing::info!(path = %config.credentials_path.display(), "Authorizing service account...");
    let http = reqwest::Client::new();
    let credentials = ServiceAccountCredentials::from_file(&config.credentials_path)?;
    let auth = ServiceAccountAuth::authorize(credentials, http.clone(), SPREADSHEETS_SCOPE).await?;

    let sheets = GoogleSheetsRepository::new(
        http,
        auth,
        config.spreadsheet_id.clone(),
        &config.sheets_api_base,
    )?;

    let app = api::router(AppState::new(Arc::new(sheets)), &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
