use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::DeliveryProfile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, session_id: &SessionId)
    -> Result<Option<DeliveryProfile>, RepositoryError>;
    async fn save(&self, profile: &DeliveryProfile) -> Result<(), RepositoryError>;
}
