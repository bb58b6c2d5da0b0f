pub mod auth;
pub mod middleware;
pub mod quiz;
pub mod schemes;

use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::delete, routing::get, routing::post, Json, Router};
use serde_json::json;
use std::sync::Arc;

pub fn build_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth routes
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Quiz evaluation
        .route("/quiz/submit", post(quiz::submit))
        // Scheme catalog and bookmarks
        .route("/schemes", get(schemes::list_schemes))
        .route("/schemes/save/{scheme_id}", post(schemes::save_scheme))
        .route("/schemes/saved", get(schemes::saved_schemes))
        .route("/schemes/unsave/{scheme_id}", delete(schemes::unsave_scheme))
        .with_state(state)
}

/// Uniform 500 body for unexpected failures.
pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}
