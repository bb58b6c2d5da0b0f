pub mod pool;
pub mod repos;

// Re-export commonly used items
pub use pool::{create_pool, run_migrations};
pub use repos::quiz_submission::QuizSubmissionRepo;
pub use repos::saved_scheme::{SavedSchemeRepo, SavedSchemeRow};
pub use repos::user::{UserRepo, UserRow};
