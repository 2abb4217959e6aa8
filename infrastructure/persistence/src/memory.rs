use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::chat::model::Conversation;
use business::domain::chat::repository::ConversationRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

/// Process-local cart store. Backs the Postgres cart store while it is unreachable.
#[derive(Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError> {
        let carts = self.carts.read().map_err(|_| RepositoryError::Persistence)?;
        Ok(carts.get(session_id).cloned())
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.write().map_err(|_| RepositoryError::Persistence)?;
        carts.insert(cart.session_id.clone(), cart.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        let mut carts = self.carts.write().map_err(|_| RepositoryError::Persistence)?;
        carts.remove(session_id);
        Ok(())
    }
}

/// Default idle time after which a chat history is forgotten.
pub const DEFAULT_CONVERSATION_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);
/// Default number of chat histories kept at once.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 10_000;

struct StoredConversation {
    conversation: Conversation,
    last_seen: Instant,
}

/// Chat histories live only in memory and are lost on restart.
///
/// Histories idle for longer than `idle_ttl` are dropped, and once
/// `max_sessions` are stored the least recently used one makes room for a new
/// session.
pub struct InMemoryConversationRepository {
    conversations: RwLock<HashMap<SessionId, StoredConversation>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::with_limits(DEFAULT_CONVERSATION_IDLE_TTL, DEFAULT_MAX_CONVERSATIONS)
    }
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.conversations.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict(&self, conversations: &mut HashMap<SessionId, StoredConversation>, incoming: &SessionId) {
        let before = conversations.len();
        conversations.retain(|_, stored| stored.last_seen.elapsed() < self.idle_ttl);

        while conversations.len() >= self.max_sessions && !conversations.contains_key(incoming) {
            let oldest = conversations
                .iter()
                .min_by_key(|(_, stored)| stored.last_seen)
                .map(|(session_id, _)| session_id.clone());
            match oldest {
                Some(session_id) => {
                    conversations.remove(&session_id);
                }
                None => break,
            }
        }

        let evicted = before.saturating_sub(conversations.len());
        if evicted > 0 {
            tracing::debug!("Evicted {} chat histories", evicted);
        }
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Conversation>, RepositoryError> {
        let conversations = self
            .conversations
            .read()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(conversations
            .get(session_id)
            .filter(|stored| stored.last_seen.elapsed() < self.idle_ttl)
            .map(|stored| stored.conversation.clone()))
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        let mut conversations = self
            .conversations
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        self.evict(&mut conversations, &conversation.session_id);
        conversations.insert(
            conversation.session_id.clone(),
            StoredConversation {
                conversation: conversation.clone(),
                last_seen: Instant::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        let mut conversations = self
            .conversations
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        conversations.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::chat::model::ChatMessage;

    #[tokio::test]
    async fn should_store_carts_per_session() {
        let repo = InMemoryCartRepository::new();
        let a = SessionId::new("a");
        let b = SessionId::new("b");

        repo.save(&Cart::new(a.clone())).await.unwrap();

        assert!(repo.get(&a).await.unwrap().is_some());
        assert!(repo.get(&b).await.unwrap().is_none());

        repo.delete(&a).await.unwrap();
        assert!(repo.get(&a).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_store_and_reset_conversations() {
        let repo = InMemoryConversationRepository::new();
        let session_id = SessionId::new("chat-1");
        let mut conversation = Conversation::new(session_id.clone());
        conversation.push(ChatMessage::from_user("Oi").unwrap());

        repo.save(&conversation).await.unwrap();
        let stored = repo.get(&session_id).await.unwrap().unwrap();
        assert_eq!(stored.messages().len(), 1);

        repo.delete(&session_id).await.unwrap();
        assert!(repo.get(&session_id).await.unwrap().is_none());
    }

    fn conversation(id: &str) -> Conversation {
        let mut conversation = Conversation::new(SessionId::new(id));
        conversation.push(ChatMessage::from_user("Tem pizza?").unwrap());
        conversation
    }

    #[tokio::test]
    async fn should_evict_least_recent_conversation_at_capacity() {
        let repo = InMemoryConversationRepository::with_limits(Duration::from_secs(3600), 2);

        repo.save(&conversation("a")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        repo.save(&conversation("b")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        repo.save(&conversation("a")).await.unwrap();
        repo.save(&conversation("c")).await.unwrap();

        assert_eq!(repo.len(), 2);
        assert!(repo.get(&SessionId::new("a")).await.unwrap().is_some());
        assert!(repo.get(&SessionId::new("b")).await.unwrap().is_none());
        assert!(repo.get(&SessionId::new("c")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn should_forget_idle_conversations() {
        let repo = InMemoryConversationRepository::with_limits(Duration::ZERO, 10);

        repo.save(&conversation("a")).await.unwrap();
        assert!(repo.get(&SessionId::new("a")).await.unwrap().is_none());

        repo.save(&conversation("b")).await.unwrap();
        assert_eq!(repo.len(), 1);
    }
}
