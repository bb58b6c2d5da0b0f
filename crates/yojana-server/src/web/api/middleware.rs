use crate::auth::validate_access_token;
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use yojana_common::models::auth::Claims;

/// Extractor that validates a JWT Bearer token and provides the claims.
/// Every rejection -- missing header, malformed header, bad signature,
/// undecodable payload, expired token -- produces the same 401 body; the
/// precise reason only reaches the logs.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid token"})),
    )
        .into_response()
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = match auth_header {
            Some(val) => match val.strip_prefix("Bearer ") {
                Some(t) => t,
                None => {
                    tracing::debug!("Rejected request: malformed authorization header");
                    return Err(unauthorized());
                }
            },
            None => {
                tracing::debug!("Rejected request: missing authorization header");
                return Err(unauthorized());
            }
        };

        match validate_access_token(token, &state.config.auth.jwt_secret) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
                Err(unauthorized())
            }
        }
    }
}
