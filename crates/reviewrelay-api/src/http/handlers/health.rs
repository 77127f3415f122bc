//! Liveness endpoint with a downstream reachability probe.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health - Always 200. Downstream health is reported as data: the
/// `healthy` flag reflects the Mastra `/health` probe, and `error`
/// appears only when the probe itself failed in transit.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let probe = state.mastra.check_health().await;

    let mut mastra = json!({
        "url": state.config.mastra_api_url,
        "healthy": probe.is_healthy(),
    });
    if let Some(error) = probe.error() {
        mastra["error"] = json!(error);
    }

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": super::SERVICE_NAME,
        "mastraApi": mastra,
    }))
}
