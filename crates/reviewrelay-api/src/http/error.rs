//! Forwarding-path error type mapped onto the wire format GitLab sees.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reviewrelay_types::error::MastraApiError;

/// Failures of the webhook forwarding path.
///
/// Probe failures on the auxiliary endpoints never reach this type; they
/// degrade to reported values inside a 200 response.
#[derive(Debug)]
pub enum WebhookError {
    /// A required configuration value is unset. Carries the variable name.
    MissingConfig(&'static str),
    /// The Mastra call failed.
    Mastra(MastraApiError),
    /// Anything else on the forwarding path (bad JSON, bad project id).
    Internal(String),
}

impl From<MastraApiError> for WebhookError {
    fn from(e: MastraApiError) -> Self {
        WebhookError::Mastra(e)
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            // Detected before any outbound call; names the missing value.
            WebhookError::MissingConfig(name) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("{name} 未配置") })),
            )
                .into_response(),
            // Downstream answered with an error status; echo status and body.
            WebhookError::Mastra(e @ MastraApiError::CallFailed { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": e.to_string() })),
            )
                .into_response(),
            WebhookError::Mastra(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": format!("处理失败: {e}") })),
            )
                .into_response(),
            WebhookError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": format!("处理失败: {msg}") })),
            )
                .into_response(),
        }
    }
}
