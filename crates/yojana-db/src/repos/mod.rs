pub mod quiz_submission;
pub mod saved_scheme;
pub mod user;
