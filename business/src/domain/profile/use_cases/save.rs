use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::DeliveryProfile;
use crate::domain::shared::value_objects::SessionId;

pub struct SaveProfileParams {
    pub session_id: SessionId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub complement: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait SaveProfileUseCase: Send + Sync {
    async fn execute(&self, params: SaveProfileParams) -> Result<DeliveryProfile, ProfileError>;
}
