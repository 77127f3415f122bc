//! `MastraClient` -- typed access to the remote Mastra API.
//!
//! One shared [`reqwest::Client`] serves every call. Requests are plain
//! request/response; nothing is streamed and nothing is retried here.
//! The client carries a bounded timeout so a hung downstream cannot hang
//! an inbound request indefinitely.

use std::time::Duration;

use serde_json::Value;

use reviewrelay_types::error::MastraApiError;
use reviewrelay_types::probe::ProbeOutcome;
use reviewrelay_types::review::{ExecuteWorkflowRequest, WorkflowResult};

/// Path of the code-review workflow execution endpoint.
const EXECUTE_PATH: &str = "/api/workflows/codeReviewWorkflow/execute";

/// Client for the Mastra API the relay forwards to.
#[derive(Debug, Clone)]
pub struct MastraClient {
    client: reqwest::Client,
    base_url: String,
}

/// Diagnostic snapshot of the Mastra API.
///
/// `None` means that resource answered with a non-success status; the
/// diagnostics endpoint reports a placeholder for it. Transport-level
/// failures never produce a snapshot at all.
#[derive(Debug, Clone)]
pub struct MastraDiagnostics {
    pub swagger_url: Option<String>,
    pub workflows: Option<Value>,
    pub agents: Option<Value>,
}

impl MastraClient {
    /// Create a client for the given base URL, e.g. `http://localhost:4111`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute the code-review workflow with a forwarded webhook payload.
    ///
    /// A non-success status becomes [`MastraApiError::CallFailed`] with
    /// the response body read as text; a success status must carry JSON.
    pub async fn execute_code_review(
        &self,
        request: &ExecuteWorkflowRequest,
    ) -> Result<WorkflowResult, MastraApiError> {
        let url = self.url(EXECUTE_PATH);
        tracing::info!(%url, "forwarding webhook to Mastra API");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| MastraApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MastraApiError::CallFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<WorkflowResult>()
            .await
            .map_err(|e| MastraApiError::InvalidResponse(e.to_string()))
    }

    /// Probe `GET /health`. Never fails; the outcome is data.
    pub async fn check_health(&self) -> ProbeOutcome {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Healthy,
            Ok(response) => ProbeOutcome::Unhealthy {
                status: response.status().as_u16(),
            },
            Err(e) => ProbeOutcome::Unreachable {
                error: e.to_string(),
            },
        }
    }

    /// Fetch the diagnostic overview: swagger availability plus the
    /// workflow and agent listings.
    ///
    /// Non-success statuses degrade to `None` per resource; a transport
    /// failure or an unparseable listing aborts the whole fetch.
    pub async fn fetch_diagnostics(&self) -> Result<MastraDiagnostics, MastraApiError> {
        let swagger = self
            .client
            .get(self.url("/swagger-ui"))
            .send()
            .await
            .map_err(|e| MastraApiError::Transport(e.to_string()))?;
        let swagger_url = swagger
            .status()
            .is_success()
            .then(|| self.url("/swagger-ui"));

        let workflows = self.fetch_listing("/api/workflows").await?;
        let agents = self.fetch_listing("/api/agents").await?;

        Ok(MastraDiagnostics {
            swagger_url,
            workflows,
            agents,
        })
    }

    async fn fetch_listing(&self, path: &str) -> Result<Option<Value>, MastraApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| MastraApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| MastraApiError::InvalidResponse(e.to_string()))?;
        Ok(Some(value))
    }
}
