use serde::{Deserialize, Serialize};

/// A quiz submission describing the demographic and socioeconomic
/// attributes a user is matched on. Not an entity with identity -- it is
/// evaluated once and persisted only as a write-only audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub age: i32,
    pub gender: String,
    pub state: String,
    pub area: String,
    pub income: String,
    pub occupation: String,
    pub education: String,
    pub category: String,
    pub has_land: String,
    pub is_disabled: String,
}
