use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

use crate::memory::InMemoryCartRepository;

/// Cart store that keeps the customer shopping when the primary store fails.
///
/// Failed reads and writes are logged and served from memory instead. A cart
/// saved to memory during an outage wins over an older primary copy, and so
/// does the empty cart left behind by a delete the primary refused.
pub struct FallbackCartRepository {
    primary: Arc<dyn CartRepository>,
    fallback: InMemoryCartRepository,
}

impl FallbackCartRepository {
    pub fn new(primary: Arc<dyn CartRepository>) -> Self {
        Self {
            primary,
            fallback: InMemoryCartRepository::new(),
        }
    }
}

#[async_trait]
impl CartRepository for FallbackCartRepository {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError> {
        let local = self.fallback.get(session_id).await?;

        match self.primary.get(session_id).await {
            Ok(remote) => Ok(match (remote, local) {
                (Some(remote), Some(local)) if local.updated_at > remote.updated_at => Some(local),
                (Some(remote), _) => Some(remote),
                (None, local) => local,
            }),
            Err(e) => {
                tracing::warn!(
                    "Cart store unavailable for session {}, using memory: {}",
                    session_id,
                    e
                );
                Ok(local)
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        match self.primary.save(cart).await {
            Ok(()) => self.fallback.delete(&cart.session_id).await,
            Err(e) => {
                tracing::warn!(
                    "Failed to persist cart for session {}, keeping it in memory: {}",
                    cart.session_id,
                    e
                );
                self.fallback.save(cart).await
            }
        }
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        match self.primary.delete(session_id).await {
            Ok(()) => self.fallback.delete(session_id).await,
            Err(e) => {
                tracing::warn!(
                    "Failed to delete cart for session {}, masking it in memory: {}",
                    session_id,
                    e
                );
                // A fresh empty cart outranks the stale primary copy on the next read
                self.fallback.save(&Cart::new(session_id.clone())).await
            }
        }
    }
}
