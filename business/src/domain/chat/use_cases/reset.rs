use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::shared::value_objects::SessionId;

pub struct ResetConversationParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait ResetConversationUseCase: Send + Sync {
    async fn execute(&self, params: ResetConversationParams) -> Result<(), ChatError>;
}
