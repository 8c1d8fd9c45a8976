// Infrastructure layer module
// Contains adapters for the Google Sheets API and the relay's HTTP endpoint

pub mod http_form_client;
pub mod repositories;

pub use http_form_client::HttpFormClient;
