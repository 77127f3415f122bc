//! Axum router configuration with middleware.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the relay router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/webhook/gitlab",
            post(handlers::webhook::receive_gitlab_webhook),
        )
        .route("/health", get(handlers::health::health))
        .route("/test/mastra-api", get(handlers::diagnostics::test_mastra_api))
        .route("/info", get(handlers::info::info))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
