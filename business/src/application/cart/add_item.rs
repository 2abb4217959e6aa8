use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartAction, CartItem, MAX_LINE_QUANTITY};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {}x product {} to cart of session {}",
            params.quantity, params.product_id, params.session_id
        ));

        if params.quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }
        if params.quantity > i64::from(MAX_LINE_QUANTITY) {
            return Err(CartError::QuantityLimitExceeded);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.is_available {
            return Err(CartError::ProductUnavailable);
        }

        let item = CartItem::from_product(&product, params.quantity as u32)?;

        let mut cart = self
            .repository
            .get(&params.session_id)
            .await?
            .unwrap_or_else(|| Cart::new(params.session_id.clone()));
        cart.apply(CartAction::Add(item))?;

        self.repository.save(&cart).await?;

        Ok(cart)
    }
}
