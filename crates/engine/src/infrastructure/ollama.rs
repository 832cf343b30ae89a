//! Ollama LLM client (native chat API with structured outputs)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wizbattle_domain::SamplingConfig;

use crate::infrastructure::ports::{
    FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, TokenUsage,
};

/// Client for Ollama's `/api/chat` endpoint.
///
/// The request's output schema is sent as `format`, which makes Ollama
/// constrain decoding to that schema.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

/// Default Ollama base URL.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default model for Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Default request timeout in seconds.
pub const DEFAULT_OLLAMA_TIMEOUT_SECS: u64 = 120;

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self::with_timeout(base_url, model, DEFAULT_OLLAMA_TIMEOUT_SECS)
    }

    /// Create client with custom timeout.
    pub fn with_timeout(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl LlmPort for OllamaClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = build_chat_request(&self.model, &request);

        let response = self
            .client
            .post(self.chat_url())
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::request_failed(format!("timed out waiting for {}: {e}", self.model))
                } else {
                    LlmError::request_failed(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(LlmError::request_failed)?;
            return Err(LlmError::RequestFailed(format!("HTTP {status}: {error_text}")));
        }

        let api_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(LlmError::invalid_response)?;

        Ok(convert_response(api_response))
    }
}

fn build_chat_request<'a>(model: &'a str, request: &'a LlmRequest) -> OllamaChatRequest<'a> {
    OllamaChatRequest {
        model,
        messages: request
            .messages
            .iter()
            .map(|m| OllamaMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect(),
        stream: false,
        format: &request.output_schema,
        options: OllamaOptions::from(&request.sampling),
        keep_alive: request
            .sampling
            .keep_alive
            .map(|d| format!("{}s", d.as_secs())),
    }
}

fn convert_response(response: OllamaChatResponse) -> LlmResponse {
    let finish_reason = match response.done_reason.as_deref() {
        Some("stop") | None => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some(_) => FinishReason::Unknown,
    };

    let usage = match (response.prompt_eval_count, response.eval_count) {
        (None, None) => None,
        (prompt, completion) => {
            let prompt_tokens = prompt.unwrap_or(0);
            let completion_tokens = completion.unwrap_or(0);
            Some(TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens.saturating_add(completion_tokens),
            })
        }
    };

    LlmResponse {
        content: response.message.content,
        finish_reason,
        usage,
    }
}

// =============================================================================
// Ollama API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage>,
    stream: bool,
    format: &'a serde_json::Value,
    options: OllamaOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Default, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mirostat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_last_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_ctx: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

impl From<&SamplingConfig> for OllamaOptions {
    fn from(config: &SamplingConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            min_p: config.min_p,
            top_k: config.top_k,
            mirostat: config.mirostat,
            repeat_penalty: config.repeat_penalty,
            repeat_last_n: config.repeat_last_n,
            num_ctx: config.context_window,
            num_predict: config.max_tokens,
            stop: config.stop_sequences.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
    done_reason: Option<String>,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}
