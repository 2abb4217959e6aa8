use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;
use crate::domain::shared::value_objects::SessionId;

pub struct SendChatMessageParams {
    pub session_id: SessionId,
    pub text: String,
}

#[async_trait]
pub trait SendChatMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendChatMessageParams) -> Result<ChatReply, ChatError>;
}
