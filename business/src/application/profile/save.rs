use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::{DeliveryProfile, NewDeliveryProfileProps};
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::save::{SaveProfileParams, SaveProfileUseCase};

pub struct SaveProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveProfileUseCase for SaveProfileUseCaseImpl {
    async fn execute(&self, params: SaveProfileParams) -> Result<DeliveryProfile, ProfileError> {
        self.logger.info(&format!(
            "Saving delivery profile for session: {}",
            params.session_id
        ));

        let profile = DeliveryProfile::new(NewDeliveryProfileProps {
            session_id: params.session_id,
            name: params.name,
            phone: params.phone,
            address: params.address,
            complement: params.complement,
            notes: params.notes,
        })?;

        self.repository.save(&profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub ProfileRepo {}

        #[async_trait]
        impl ProfileRepository for ProfileRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<DeliveryProfile>, RepositoryError>;
            async fn save(&self, profile: &DeliveryProfile) -> Result<(), RepositoryError>;
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

    fn params(phone: &str) -> SaveProfileParams {
        SaveProfileParams {
            session_id: SessionId::new("session-1"),
            name: "Carlos".to_string(),
            phone: phone.to_string(),
            address: "Rua XV de Novembro, 45".to_string(),
            complement: Some("Casa 2".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn should_save_valid_profile() {
        let mut mock_repo = MockProfileRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = SaveProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let profile = use_case.execute(params("(41) 99876-5432")).await.unwrap();

        assert_eq!(profile.full_address(), "Rua XV de Novembro, 45, Casa 2");
    }

    #[tokio::test]
    async fn should_not_save_invalid_phone() {
        let mut mock_repo = MockProfileRepo::new();
        mock_repo.expect_save().never();

        let use_case = SaveProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("1234")).await;

        assert!(matches!(result.unwrap_err(), ProfileError::InvalidPhone));
    }
}
