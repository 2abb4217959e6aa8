use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::ChatMessage;
use business::domain::chat::services::ChatCompletionService;

use crate::client::OpenAIClient;

const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 500;

pub struct ChatAssistantOpenAI {
    client: OpenAIClient,
}

impl ChatAssistantOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(model: &str, system_prompt: &str, history: &[ChatMessage]) -> Value {
        let mut messages = vec![json!({"role": "system", "content": system_prompt})];
        messages.extend(
            history
                .iter()
                .map(|m| json!({"role": m.role.to_string(), "content": m.content})),
        );

        json!({
            "model": model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn parse_response(data: &Value) -> Result<String, ChatError> {
        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(str::trim)
            .ok_or(ChatError::CompletionFailed)?;

        if content.is_empty() {
            return Err(ChatError::CompletionFailed);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl ChatCompletionService for ChatAssistantOpenAI {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let body = Self::build_body(&self.client.model, system_prompt, history);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                ChatError::CompletionFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("Chat completion returned status {}", response.status());
            return Err(ChatError::CompletionFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| ChatError::CompletionFailed)?;

        Self::parse_response(&data)
    }
}
