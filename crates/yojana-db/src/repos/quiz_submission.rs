use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;
use yojana_common::models::quiz::QuizSubmission;

/// Write-only audit log of quiz submissions. Records are tagged with the
/// submitting user and timestamp and are never read back by the system.
pub struct QuizSubmissionRepo;

impl QuizSubmissionRepo {
    pub async fn create(pool: &PgPool, user_id: Uuid, quiz: &QuizSubmission) -> Result<()> {
        sqlx::query(
            "INSERT INTO quiz_submission \
             (user_id, age, gender, state, area, income, occupation, education, category, has_land, is_disabled) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(user_id)
        .bind(quiz.age)
        .bind(&quiz.gender)
        .bind(&quiz.state)
        .bind(&quiz.area)
        .bind(&quiz.income)
        .bind(&quiz.occupation)
        .bind(&quiz.education)
        .bind(&quiz.category)
        .bind(&quiz.has_land)
        .bind(&quiz.is_disabled)
        .execute(pool)
        .await
        .context("Failed to record quiz submission")?;
        Ok(())
    }
}
