use thiserror::Error;

/// Errors from calls to the Mastra API.
///
/// The `CallFailed` display text is the exact message relayed back to the
/// webhook caller when the workflow endpoint answers with a non-success
/// status; the other variants are wrapped in the generic failure message
/// at the HTTP boundary.
#[derive(Debug, Error)]
pub enum MastraApiError {
    /// The API answered with a non-success status.
    #[error("Mastra API 调用失败: {status} {body}")]
    CallFailed { status: u16, body: String },

    /// The request never completed (connect failure, timeout, DNS).
    #[error("{0}")]
    Transport(String),

    /// The API answered successfully but the body was not the expected JSON.
    #[error("invalid Mastra API response: {0}")]
    InvalidResponse(String),
}
