use async_trait::async_trait;

/// Repository trait for the remote spreadsheet
///
/// Defines the contract for appending rows to a tabular store.
/// Implementations handle authentication and transport details.
#[async_trait]
pub trait SheetRepository: Send + Sync {
    /// Append `rows` after the last non-empty row of `range` (A1 notation)
    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), String>;
}
