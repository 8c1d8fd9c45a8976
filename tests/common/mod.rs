//! Shared fakes for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use hackathon_registration::api::{self, AppState};
use hackathon_registration::domain::repositories::SheetRepository;

/// One recorded `append_rows` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Append {
    pub range: String,
    pub rows: Vec<Vec<String>>,
}

/// In-memory sheet that records appends and can fail on the n-th call
#[derive(Default)]
pub struct RecordingSheets {
    appends: Mutex<Vec<Append>>,
    fail_at: Option<usize>,
}

impl RecordingSheets {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fails the call with zero-based index `call`; earlier calls succeed
    pub fn failing_at(call: usize) -> Arc<Self> {
        Arc::new(Self {
            appends: Mutex::new(Vec::new()),
            fail_at: Some(call),
        })
    }

    pub fn appends(&self) -> Vec<Append> {
        self.appends.lock().unwrap().clone()
    }
}

#[async_trait]
impl SheetRepository for RecordingSheets {
    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), String> {
        let mut appends = self.appends.lock().unwrap();
        if self.fail_at == Some(appends.len()) {
            return Err("The service is currently unavailable".to_string());
        }
        appends.push(Append {
            range: range.to_string(),
            rows,
        });
        Ok(())
    }
}

/// Directory with the shipped frontend
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("build")
}

/// Router backed by `sheets`
pub fn app(sheets: Arc<RecordingSheets>) -> Router {
    api::router(AppState::new(sheets), &static_dir())
}

/// Serves the router on an ephemeral local port and returns its base URL
pub async fn spawn_app(sheets: Arc<RecordingSheets>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(sheets)).await.unwrap();
    });

    format!("http://{}", addr)
}
