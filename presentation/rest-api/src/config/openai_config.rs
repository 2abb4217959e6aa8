use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::env::{ConfigError, EnvLookup, optional, required};

/// Configuration for the chat completions endpoint.
///
/// `OPENAI_BASE_URL` and `OPENAI_MODEL` point the assistant at any
/// OpenAI-compatible provider.
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAIConfig {
    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required(lookup, "OPENAI_API_KEY")?,
            base_url: optional(lookup, "OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: optional(lookup, "OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}
