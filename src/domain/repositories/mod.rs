// Ports implemented by the infrastructure layer

pub mod sheet_repository;
pub mod submission_transport;

pub use sheet_repository::SheetRepository;
pub use submission_transport::{SubmissionTransport, TransportError};
