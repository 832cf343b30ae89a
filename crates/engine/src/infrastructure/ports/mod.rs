//! Port traits for infrastructure boundaries.
//!
//! The model host is the only external dependency, so the LLM port is the
//! only abstraction here (could swap Ollama -> any schema-constrained host).

mod error;
mod external;

pub use error::LlmError;
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

#[cfg(test)]
pub use external::MockLlmPort;
