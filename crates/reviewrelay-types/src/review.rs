//! Wire types for the code-review workflow exchange.
//!
//! The relay speaks camelCase JSON on both hops: the trigger payload it
//! sends to the Mastra execution endpoint, and the normalized result it
//! relays back to the webhook caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed tag stamped on every relayed review response, identifying the
/// remote Mastra API as the source of the result.
pub const REVIEW_SOURCE: &str = "remote-mastra-api";

/// Message used when the workflow result omits one.
pub const DEFAULT_REVIEW_MESSAGE: &str = "代码审查完成";

/// Request body for the workflow execution endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteWorkflowRequest {
    pub trigger_data: TriggerData,
}

/// Everything the review workflow needs: the raw webhook (headers and
/// body, forwarded as-is) plus the credentials and addresses from the
/// relay configuration.
///
/// Optional secrets are omitted from the JSON entirely when unset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerData {
    pub headers: Value,
    pub body: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
    pub gitlab_url: String,
    pub access_token: String,
    pub project_id: i64,
    pub dingtalk_webhook: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dingtalk_secret: Option<String>,
}

/// What the workflow execution endpoint returns.
///
/// Every field is optional; unknown fields are ignored. Defaults are
/// applied when the result is normalized into a [`ReviewResponse`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResult {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub review_count: Option<i64>,
}

/// Normalized review result relayed back to the webhook caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub success: bool,
    pub message: String,
    pub review_count: i64,
    pub source: String,
}

impl From<WorkflowResult> for ReviewResponse {
    fn from(result: WorkflowResult) -> Self {
        Self {
            success: result.success.unwrap_or(true),
            message: result
                .message
                .unwrap_or_else(|| DEFAULT_REVIEW_MESSAGE.to_string()),
            review_count: result.review_count.unwrap_or(0),
            source: REVIEW_SOURCE.to_string(),
        }
    }
}
