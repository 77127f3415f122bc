//! Overview of an inbound GitLab webhook payload.

use serde_json::Value;

/// The handful of fields worth logging from a GitLab push or merge
/// request payload. The payload itself is opaque to the relay and is
/// forwarded untouched; this summary exists only for the receipt log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WebhookSummary {
    pub object_kind: Option<String>,
    pub git_ref: Option<String>,
    pub project_name: Option<String>,
    pub commit_count: Option<usize>,
}

impl WebhookSummary {
    /// Pull the overview fields out of an arbitrary webhook payload.
    /// Anything absent or of the wrong shape stays `None`.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            object_kind: payload
                .get("object_kind")
                .and_then(Value::as_str)
                .map(str::to_owned),
            git_ref: payload.get("ref").and_then(Value::as_str).map(str::to_owned),
            project_name: payload
                .get("project")
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str)
                .map(str::to_owned),
            commit_count: payload
                .get("commits")
                .and_then(Value::as_array)
                .map(Vec::len),
        }
    }
}
