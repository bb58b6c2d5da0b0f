use crate::state::AppState;
use crate::web::api::internal_error;
use crate::web::api::middleware::AuthUser;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;
use yojana_common::models::scheme::SchemeResponse;
use yojana_db::SavedSchemeRepo;

/// GET /api/schemes - public catalog listing
#[tracing::instrument(skip(state))]
pub async fn list_schemes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let schemes: Vec<SchemeResponse> = state
        .catalog
        .list()
        .iter()
        .map(|s| s.to_response(None))
        .collect();
    Json(json!({"schemes": schemes}))
}

/// POST /api/schemes/save/{scheme_id}
#[tracing::instrument(skip(state, auth))]
pub async fn save_scheme(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(scheme_id): Path<String>,
) -> impl IntoResponse {
    let user_id: Uuid = match auth.0.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Invalid user ID in token: {}", auth.0.sub);
            return internal_error();
        }
    };

    match SavedSchemeRepo::get(&state.pool, user_id, &scheme_id).await {
        Ok(Some(_)) => {
            return Json(json!({"message": "Already saved"})).into_response();
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("DB error checking saved scheme: {:#}", e);
            return internal_error();
        }
    }

    if let Err(e) = SavedSchemeRepo::create(&state.pool, user_id, &scheme_id).await {
        tracing::error!("Failed to save scheme: {:#}", e);
        return internal_error();
    }

    Json(json!({"message": "Scheme saved successfully"})).into_response()
}

/// GET /api/schemes/saved
#[tracing::instrument(skip(state, auth))]
pub async fn saved_schemes(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> impl IntoResponse {
    let user_id: Uuid = match auth.0.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Invalid user ID in token: {}", auth.0.sub);
            return internal_error();
        }
    };

    let rows = match SavedSchemeRepo::list_for_user(&state.pool, user_id).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to list saved schemes: {:#}", e);
            return internal_error();
        }
    };

    // Resolve bookmarks against the catalog in definition order; relations
    // whose scheme id is no longer in the catalog are dropped.
    let saved_ids: HashSet<&str> = rows.iter().map(|r| r.scheme_id.as_str()).collect();
    let schemes: Vec<SchemeResponse> = state
        .catalog
        .list()
        .iter()
        .filter(|s| saved_ids.contains(s.id.as_str()))
        .map(|s| s.to_response(None))
        .collect();

    Json(json!({"schemes": schemes})).into_response()
}

/// DELETE /api/schemes/unsave/{scheme_id}
#[tracing::instrument(skip(state, auth))]
pub async fn unsave_scheme(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(scheme_id): Path<String>,
) -> impl IntoResponse {
    let user_id: Uuid = match auth.0.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Invalid user ID in token: {}", auth.0.sub);
            return internal_error();
        }
    };

    if let Err(e) = SavedSchemeRepo::delete(&state.pool, user_id, &scheme_id).await {
        tracing::error!("Failed to delete saved scheme: {:#}", e);
        return internal_error();
    }

    Json(json!({"message": "Scheme removed from saved"})).into_response()
}
