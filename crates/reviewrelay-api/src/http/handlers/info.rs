//! Static service descriptor.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /info - Service metadata. Constant apart from the configured
/// Mastra URL; no side effects.
pub async fn info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": super::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "接收 GitLab webhook 并通过 HTTP 调用远程 Mastra API 服务",
        "mastraApiUrl": state.config.mastra_api_url,
        "architecture": "GitLab Webhook → Relay Server → Remote Mastra API",
        "endpoints": [
            "POST /webhook/gitlab",
            "GET /health",
            "GET /test/mastra-api",
            "GET /info",
        ],
        "repository": "https://github.com/your-org/reviewrelay",
    }))
}
