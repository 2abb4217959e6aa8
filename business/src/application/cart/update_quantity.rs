use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartAction};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {} for session {}",
            params.product_id, params.quantity, params.session_id
        ));

        let mut cart = self
            .repository
            .get(&params.session_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;

        cart.apply(CartAction::SetQuantity {
            product_id: params.product_id,
            quantity: params.quantity,
        })?;

        self.repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Price, SessionId};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
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

    fn cart_with(product_id: Uuid, session_id: &SessionId) -> Cart {
        let mut cart = Cart::new(session_id.clone());
        cart.apply(CartAction::Add(
            CartItem::new(
                product_id,
                "Batata Frita".to_string(),
                Price::from_cents(1800),
                2,
                None,
                false,
                Price::from_cents(1800),
            )
            .unwrap(),
        ))
        .unwrap();
        cart
    }

    fn params(product_id: Uuid, quantity: i64) -> UpdateCartQuantityParams {
        UpdateCartQuantityParams {
            session_id: SessionId::new("session-1"),
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_set_line_quantity() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(move |session_id| Ok(Some(cart_with(product_id, session_id))));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(product_id, 5)).await.unwrap();

        assert_eq!(cart.find(product_id).unwrap().quantity, 5);
        assert_eq!(cart.totals().total, Price::from_cents(9000));
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_is_zero() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(move |session_id| Ok(Some(cart_with(product_id, session_id))));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(product_id, 0)).await.unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_return_item_not_found_for_missing_line() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(|session_id| Ok(Some(cart_with(Uuid::new_v4(), session_id))));
        mock_repo.expect_save().never();

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), 3)).await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_session_has_no_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let use_case = UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), 3)).await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
