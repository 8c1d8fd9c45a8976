// Repository implementations

pub mod google_sheets_repository;

pub use google_sheets_repository::{GoogleSheetsRepository, SheetsError};
