pub mod api;

use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    let cors = cors_layer(&state.config.cors.origins);

    Router::new()
        .nest("/api", api::build_api_routes(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from the configured origin allow-list. A single
/// "*" entry allows any origin; entries that fail to parse as header
/// values are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
