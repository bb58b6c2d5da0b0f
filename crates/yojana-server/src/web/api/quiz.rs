use crate::state::AppState;
use crate::web::api::internal_error;
use crate::web::api::middleware::AuthUser;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use yojana_common::matching;
use yojana_common::models::quiz::QuizSubmission;
use yojana_db::QuizSubmissionRepo;

/// POST /api/quiz/submit
#[tracing::instrument(skip(state, auth, quiz))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(quiz): Json<QuizSubmission>,
) -> impl IntoResponse {
    let user_id: Uuid = match auth.0.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Invalid user ID in token: {}", auth.0.sub);
            return internal_error();
        }
    };

    let outcome = matching::evaluate(&quiz, state.catalog.list());

    // The audit write is best-effort: the computed result is returned to
    // the user even if it fails.
    if let Err(e) = QuizSubmissionRepo::create(&state.pool, user_id, &quiz).await {
        tracing::warn!("Failed to record quiz submission for {}: {:#}", user_id, e);
    }

    Json(json!({
        "eligible_schemes": outcome.eligible,
        "fallback_schemes": outcome.fallback,
    }))
    .into_response()
}
