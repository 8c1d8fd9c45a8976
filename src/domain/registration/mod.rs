// Registration domain module
// Contains field rules, member slots and the form controller

pub mod form;
pub mod member;
pub mod submission;
pub mod value_objects;

// Re-export main types for convenience
pub use form::FormController;
pub use member::MemberSlot;
pub use submission::{MemberRecord, TeamSubmission};
pub use value_objects::{MemberField, SlotId, SubmissionStatus};
