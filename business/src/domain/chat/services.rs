use async_trait::async_trait;

use super::errors::ChatError;
use super::model::ChatMessage;

/// Service port for the hosted generative-language endpoint.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, ChatError>;
}
