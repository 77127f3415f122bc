//! Webhook forwarding handler.
//!
//! Receives a GitLab webhook, checks the required configuration is
//! present, and forwards the whole notification to the remote Mastra
//! code-review workflow in one synchronous call. The payload is opaque:
//! it is parsed only to log an overview and travels downstream as-is.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use secrecy::ExposeSecret;
use serde_json::{Map, Value};

use reviewrelay_types::config::RelayConfig;
use reviewrelay_types::review::{ExecuteWorkflowRequest, ReviewResponse, TriggerData};
use reviewrelay_types::webhook::WebhookSummary;

use crate::http::error::WebhookError;
use crate::state::AppState;

/// POST /webhook/gitlab - Forward a GitLab webhook to the review workflow.
///
/// The webhook secret is forwarded for the workflow to check; it is not
/// compared against the inbound `x-gitlab-token` header here.
pub async fn receive_gitlab_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ReviewResponse>, WebhookError> {
    log_receipt(&headers);

    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| WebhookError::Internal(e.to_string()))?;

    let summary = WebhookSummary::from_payload(&payload);
    tracing::info!(
        object_kind = summary.object_kind.as_deref().unwrap_or("unknown"),
        git_ref = summary.git_ref.as_deref().unwrap_or(""),
        project = summary.project_name.as_deref().unwrap_or(""),
        commits = summary.commit_count.unwrap_or(0),
        "received GitLab webhook"
    );

    let request = build_trigger(&state.config, &headers, payload)?;

    let result = state.mastra.execute_code_review(&request).await?;

    let response = ReviewResponse::from(result);
    tracing::info!(review_count = response.review_count, "workflow execution succeeded");
    Ok(Json(response))
}

/// Assemble the workflow trigger from the inbound request and the
/// configuration snapshot. Fails with the name of the first missing
/// required value, before anything is sent.
fn build_trigger(
    config: &RelayConfig,
    headers: &HeaderMap,
    payload: Value,
) -> Result<ExecuteWorkflowRequest, WebhookError> {
    let required = config.required().map_err(WebhookError::MissingConfig)?;

    let project_id: i64 = required.project_id.trim().parse().map_err(|_| {
        WebhookError::Internal(format!("invalid GITLAB_PROJECT_ID: {}", required.project_id))
    })?;

    Ok(ExecuteWorkflowRequest {
        trigger_data: TriggerData {
            headers: headers_to_json(headers),
            body: payload,
            secret_token: config
                .gitlab_webhook_secret
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
            gitlab_url: config.gitlab_url.clone(),
            access_token: required.access_token.to_string(),
            project_id,
            dingtalk_webhook: required.dingtalk_webhook.to_string(),
            dingtalk_secret: config
                .dingtalk_secret
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
        },
    })
}

/// Inbound headers as a flat JSON object. Repeated names keep the last
/// value; non-UTF-8 bytes are replaced.
fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for (name, value) in headers {
        map.insert(
            name.as_str().to_string(),
            Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
        );
    }
    Value::Object(map)
}

/// Log the receipt overview. The webhook token itself is never logged,
/// only whether it was sent.
fn log_receipt(headers: &HeaderMap) {
    let event = headers
        .get("x-gitlab-event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let token = if headers.contains_key("x-gitlab-token") {
        "***"
    } else {
        "missing"
    };
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    tracing::info!(
        gitlab_event = event,
        gitlab_token = token,
        content_type,
        "incoming webhook request"
    );
}
