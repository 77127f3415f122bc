//! Connectivity diagnostics against the Mastra API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Reported when the swagger page is not served.
const SWAGGER_UNAVAILABLE: &str = "Not available";
/// Reported when a listing endpoint does not answer successfully.
const LISTING_UNAVAILABLE: &str = "Could not fetch";

/// GET /test/mastra-api - Check the relay can reach the Mastra API.
///
/// Per-resource non-success degrades to a placeholder string; only a
/// transport-level failure fails the whole check.
pub async fn test_mastra_api(State(state): State<AppState>) -> Response {
    tracing::info!(url = %state.config.mastra_api_url, "testing Mastra API connectivity");

    match state.mastra.fetch_diagnostics().await {
        Ok(diag) => Json(json!({
            "success": true,
            "mastraApiUrl": state.config.mastra_api_url,
            "swagger": diag
                .swagger_url
                .unwrap_or_else(|| SWAGGER_UNAVAILABLE.to_string()),
            "workflows": diag.workflows.unwrap_or_else(|| json!(LISTING_UNAVAILABLE)),
            "agents": diag.agents.unwrap_or_else(|| json!(LISTING_UNAVAILABLE)),
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Mastra API connectivity test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": format!("无法连接到 Mastra API: {e}"),
                    "mastraApiUrl": state.config.mastra_api_url,
                    "hint": "请确保 Mastra API 服务正在运行 (npm run dev)",
                })),
            )
                .into_response()
        }
    }
}
