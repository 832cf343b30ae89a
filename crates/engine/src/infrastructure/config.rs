//! Application configuration

use std::env;

use anyhow::{Context, Result};

use super::ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_TIMEOUT_SECS};

/// Default listen port.
pub const DEFAULT_SERVER_PORT: u16 = 3167;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP port
    pub server_port: u16,

    /// Ollama server base URL (native API, no `/v1`)
    pub ollama_base_url: String,
    /// Model used for every generation
    pub ollama_model: String,
    /// Per-request timeout against the model host
    pub ollama_timeout_secs: u64,

    /// CORS allowed origins (comma-separated, or "*" for any)
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let first_of = |keys: &[&str]| keys.iter().find_map(|key| lookup(*key));

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: match first_of(&["SERVER_PORT", "PORT"]) {
                Some(port) => port
                    .trim()
                    .parse()
                    .context("SERVER_PORT must be a valid port number")?,
                None => DEFAULT_SERVER_PORT,
            },

            ollama_base_url: first_of(&["OLLAMA_BASE_URL", "OLLAMA_URL"])
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string()),
            ollama_model: lookup("OLLAMA_MODEL")
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            ollama_timeout_secs: match lookup("OLLAMA_TIMEOUT_SECS") {
                Some(secs) => secs
                    .trim()
                    .parse()
                    .context("OLLAMA_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_OLLAMA_TIMEOUT_SECS,
            },

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
