use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartAction};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of session {}",
            params.product_id, params.session_id
        ));

        let mut cart = self
            .repository
            .get(&params.session_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;

        cart.apply(CartAction::Remove(params.product_id))?;

        self.repository.save(&cart).await?;

        Ok(cart)
    }
}
