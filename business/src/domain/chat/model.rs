use chrono::{DateTime, Utc};

use super::errors::ChatError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::SessionId;

/// Messages kept per session; older ones are dropped first.
pub const MAX_HISTORY_MESSAGES: usize = 20;
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Validates and trims customer input.
    pub fn from_user(text: &str) -> Result<Self, ChatError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(ChatError::MessageEmpty);
        }
        if content.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ChatError::MessageTooLong);
        }
        Ok(Self {
            role: ChatRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn from_assistant(text: &str) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: text.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Rolling chat history of one session.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub session_id: SessionId,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            messages: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(session_id: SessionId, messages: Vec<ChatMessage>) -> Self {
        Self {
            session_id,
            messages,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if self.messages.len() > MAX_HISTORY_MESSAGES {
            let overflow = self.messages.len() - MAX_HISTORY_MESSAGES;
            self.messages.drain(..overflow);
        }
        // History must open with a user turn for chat completion APIs
        while self
            .messages
            .first()
            .is_some_and(|m| m.role == ChatRole::Assistant)
        {
            self.messages.remove(0);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    /// Catalog products the reply was grounded on.
    pub products: Vec<Product>,
}
