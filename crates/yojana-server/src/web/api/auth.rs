use crate::auth::{create_access_token, hash_password, verify_password};
use crate::state::AppState;
use crate::web::api::internal_error;
use crate::web::api::middleware::AuthUser;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use yojana_common::models::auth::User;
use yojana_db::UserRepo;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/signup
#[tracing::instrument(skip(state, req))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> impl IntoResponse {
    // Point lookup immediately before insert; the unique index on email
    // backstops the race between two concurrent identical signups.
    match UserRepo::get_by_email(&state.pool, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Email already registered"})),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("DB error during signup: {:#}", e);
            return internal_error();
        }
    }

    let password_hash = match hash_password(&req.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Password hashing failed: {:#}", e);
            return internal_error();
        }
    };

    let user_id = Uuid::new_v4();
    if let Err(e) = UserRepo::create(&state.pool, user_id, &req.email, &password_hash, &req.name).await
    {
        tracing::error!("Failed to create user: {:#}", e);
        return internal_error();
    }

    let token = match create_access_token(
        &user_id.to_string(),
        &req.email,
        &state.config.auth.jwt_secret,
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to create access token: {:#}", e);
            return internal_error();
        }
    };

    Json(json!({
        "token": token,
        "user": {"id": user_id, "email": req.email, "name": req.name},
    }))
    .into_response()
}

/// POST /api/auth/login
#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match UserRepo::get_by_email(&state.pool, &req.email).await {
        Ok(Some(u)) => u,
        // Unknown email and wrong password are indistinguishable to the
        // client.
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid email or password"})),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("DB error during login: {:#}", e);
            return internal_error();
        }
    };

    match verify_password(&req.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid email or password"})),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Password verification error: {:#}", e);
            return internal_error();
        }
    }

    let token = match create_access_token(
        &user.user_id.to_string(),
        &user.email,
        &state.config.auth.jwt_secret,
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to create access token: {:#}", e);
            return internal_error();
        }
    };

    Json(json!({
        "token": token,
        "user": {"id": user.user_id, "email": user.email, "name": user.name},
    }))
    .into_response()
}

/// GET /api/auth/me
#[tracing::instrument(skip(state))]
pub async fn me(State(state): State<Arc<AppState>>, auth: AuthUser) -> impl IntoResponse {
    let user_id: Uuid = match auth.0.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Invalid user ID in token: {}", auth.0.sub);
            return internal_error();
        }
    };

    match UserRepo::get_by_id(&state.pool, user_id).await {
        Ok(Some(user)) => Json(User {
            id: user.user_id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        })
        .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User not found"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to get user: {:#}", e);
            internal_error()
        }
    }
}
