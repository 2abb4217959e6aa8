use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
