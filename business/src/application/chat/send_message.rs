use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{ChatMessage, ChatReply, Conversation};
use crate::domain::chat::prompt::build_system_prompt;
use crate::domain::chat::repository::ConversationRepository;
use crate::domain::chat::services::ChatCompletionService;
use crate::domain::chat::use_cases::send_message::{SendChatMessageParams, SendChatMessageUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

const MAX_MATCHED_PRODUCTS: usize = 5;

pub struct SendChatMessageUseCaseImpl {
    pub repository: Arc<dyn ConversationRepository>,
    pub search: Arc<dyn SearchProductsUseCase>,
    pub completion: Arc<dyn ChatCompletionService>,
    pub logger: Arc<dyn Logger>,
    pub restaurant_name: String,
}

#[async_trait]
impl SendChatMessageUseCase for SendChatMessageUseCaseImpl {
    async fn execute(&self, params: SendChatMessageParams) -> Result<ChatReply, ChatError> {
        let user_message = ChatMessage::from_user(&params.text)?;

        self.logger.info(&format!(
            "Chat message from session {} ({} chars)",
            params.session_id,
            user_message.content.chars().count()
        ));

        // The assistant still answers without catalog context
        let products = match self
            .search
            .execute(SearchProductsParams {
                query: user_message.content.clone(),
                limit: MAX_MATCHED_PRODUCTS,
            })
            .await
        {
            Ok(products) => products,
            Err(e) => {
                self.logger
                    .warn(&format!("Product lookup for chat failed: {}", e));
                vec![]
            }
        };

        let mut conversation = self
            .repository
            .get(&params.session_id)
            .await?
            .unwrap_or_else(|| Conversation::new(params.session_id.clone()));
        conversation.push(user_message);

        let system_prompt = build_system_prompt(&self.restaurant_name, &products);
        let reply = self
            .completion
            .complete(&system_prompt, conversation.messages())
            .await?;

        conversation.push(ChatMessage::from_assistant(&reply));
        if let Err(e) = self.repository.save(&conversation).await {
            self.logger.warn(&format!(
                "Failed to store chat history for session {}: {}",
                params.session_id, e
            ));
        }

        self.logger.debug(&format!(
            "Chat reply grounded on {} products",
            products.len()
        ));

        Ok(ChatReply {
            message: reply,
            products,
        })
    }
}
