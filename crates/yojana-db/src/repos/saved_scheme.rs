use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SavedSchemeRow {
    pub user_id: Uuid,
    pub scheme_id: String,
    pub saved_at: DateTime<Utc>,
}

/// Per-user scheme bookmarks. At most one row per (user_id, scheme_id);
/// the composite primary key backstops the check-before-insert in the
/// handler.
pub struct SavedSchemeRepo;

impl SavedSchemeRepo {
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        scheme_id: &str,
    ) -> Result<Option<SavedSchemeRow>> {
        let row = sqlx::query_as::<_, SavedSchemeRow>(
            "SELECT user_id, scheme_id, saved_at FROM saved_scheme \
             WHERE user_id = $1 AND scheme_id = $2",
        )
        .bind(user_id)
        .bind(scheme_id)
        .fetch_optional(pool)
        .await
        .context("Failed to get saved scheme")?;
        Ok(row)
    }

    /// Insert a bookmark. A concurrent duplicate insert is absorbed by the
    /// primary key rather than erroring, keeping the save idempotent.
    pub async fn create(pool: &PgPool, user_id: Uuid, scheme_id: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO saved_scheme (user_id, scheme_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, scheme_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(scheme_id)
        .execute(pool)
        .await
        .context("Failed to save scheme")?;
        Ok(())
    }

    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<SavedSchemeRow>> {
        let rows = sqlx::query_as::<_, SavedSchemeRow>(
            "SELECT user_id, scheme_id, saved_at FROM saved_scheme \
             WHERE user_id = $1 ORDER BY saved_at",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .context("Failed to list saved schemes")?;
        Ok(rows)
    }

    /// Unconditional delete; removing a non-existent bookmark is not an
    /// error.
    pub async fn delete(pool: &PgPool, user_id: Uuid, scheme_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM saved_scheme WHERE user_id = $1 AND scheme_id = $2")
            .bind(user_id)
            .bind(scheme_id)
            .execute(pool)
            .await
            .context("Failed to delete saved scheme")?;
        Ok(())
    }
}
