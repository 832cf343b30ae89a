//! External model port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wizbattle_domain::{GenerationKind, SamplingConfig};

use super::error::LlmError;

// =============================================================================
// LLM Types
// =============================================================================

/// A schema-constrained generation request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// What is being generated (for logging and adapter-side routing)
    pub kind: GenerationKind,
    /// The conversation, in order
    pub messages: Vec<ChatMessage>,
    /// JSON Schema the output is constrained to at generation time
    pub output_schema: serde_json::Value,
    /// Decoding parameters
    pub sampling: SamplingConfig,
}

impl LlmRequest {
    pub fn new(kind: GenerationKind, output_schema: serde_json::Value) -> Self {
        Self {
            kind,
            messages: Vec::new(),
            output_schema,
            sampling: SamplingConfig::default(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(prompt));
        self
    }

    pub fn with_user_message(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Content of the first message with `role`, if any.
    pub fn content_for(&self, role: MessageRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::System => "system",
        }
    }
}

/// Response from the LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated text, expected to satisfy the bound schema
    pub content: String,
    /// Finish reason
    pub finish_reason: FinishReason,
    /// Token usage
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// A completed response with no usage data.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }
}

/// Reason the generation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    /// Hit the max token budget
    Length,
    #[serde(other)]
    Unknown,
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The external generation capability.
///
/// One call is one synchronous (from the caller's view) model invocation:
/// no streaming, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}
