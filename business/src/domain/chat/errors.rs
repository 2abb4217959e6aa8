#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.message_empty")]
    MessageEmpty,
    #[error("chat.message_too_long")]
    MessageTooLong,
    #[error("chat.completion_failed")]
    CompletionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
