use std::sync::Arc;

use crate::domain::repositories::SheetRepository;

/// Shared router state
///
/// Holds the spreadsheet client created at startup. It is only read by
/// handlers, so clones share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetRepository>,
}

impl AppState {
    pub fn new(sheets: Arc<dyn SheetRepository>) -> Self {
        Self { sheets }
    }
}
