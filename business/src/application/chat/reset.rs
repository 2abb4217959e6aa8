use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::repository::ConversationRepository;
use crate::domain::chat::use_cases::reset::{ResetConversationParams, ResetConversationUseCase};
use crate::domain::logger::Logger;

pub struct ResetConversationUseCaseImpl {
    pub repository: Arc<dyn ConversationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetConversationUseCase for ResetConversationUseCaseImpl {
    async fn execute(&self, params: ResetConversationParams) -> Result<(), ChatError> {
        self.logger.info(&format!(
            "Resetting chat history for session: {}",
            params.session_id
        ));

        self.repository.delete(&params.session_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::model::Conversation;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub ConversationRepo {}

        #[async_trait]
        impl ConversationRepository for ConversationRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<Conversation>, RepositoryError>;
            async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError>;
            async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_session_history() {
        let mut repo = MockConversationRepo::new();
        repo.expect_delete()
            .withf(|session_id| session_id.as_str() == "session-1")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ResetConversationUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResetConversationParams {
                session_id: SessionId::new("session-1"),
            })
            .await;

        assert!(result.is_ok());
    }
}
