use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::DeliveryProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase};

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<DeliveryProfile, ProfileError> {
        self.logger.info(&format!(
            "Getting delivery profile for session: {}",
            params.session_id
        ));

        self.repository
            .get(&params.session_id)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}
