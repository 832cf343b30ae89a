//! Error types for port operations.

/// Failure of the external model capability.
///
/// Both variants describe the invocation itself going wrong; whether the
/// returned text is a valid record is decided by the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// The model host could not be reached, timed out, or answered with an
    /// error status.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The model host answered but its response envelope could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}
