// Google service-account authentication
//
// A signed JWT assertion is exchanged for an OAuth access token which
// authorizes calls to the Sheets API.

pub mod errors;
pub mod jwt;
pub mod service_account;

pub use errors::{AuthError, AuthResult};
pub use service_account::{ServiceAccountAuth, ServiceAccountCredentials, SPREADSHEETS_SCOPE};
