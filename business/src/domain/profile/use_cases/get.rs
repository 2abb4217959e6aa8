use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::DeliveryProfile;
use crate::domain::shared::value_objects::SessionId;

pub struct GetProfileParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<DeliveryProfile, ProfileError>;
}
