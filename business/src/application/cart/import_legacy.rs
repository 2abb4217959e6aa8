use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::legacy::parse_legacy_snapshot;
use crate::domain::cart::model::{Cart, CartAction, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::import_legacy::{
    ImportLegacyCartParams, ImportLegacyCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ImportLegacyCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ImportLegacyCartUseCaseImpl {
    /// Rebuilds a snapshot line from the catalog. Only the product id and the
    /// quantity come from the snapshot. Unknown or unavailable products yield `None`.
    async fn reprice(&self, line: &CartItem) -> Result<Option<CartItem>, CartError> {
        let product = match self.product_repository.get_by_id(line.product_id).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => return Ok(None),
            Err(e) => return Err(CartError::Repository(e)),
        };
        if !product.is_available {
            return Ok(None);
        }
        Ok(CartItem::from_product(&product, line.quantity).ok())
    }
}

#[async_trait]
impl ImportLegacyCartUseCase for ImportLegacyCartUseCaseImpl {
    async fn execute(&self, params: ImportLegacyCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Importing legacy cart for session: {}",
            params.session_id
        ));

        let import = parse_legacy_snapshot(&params.snapshot);
        let mut dropped = import.dropped;
        let mut items = Vec::with_capacity(import.items.len());
        for line in &import.items {
            match self.reprice(line).await? {
                Some(item) => items.push(item),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            self.logger.warn(&format!(
                "Dropped {} lines from legacy cart of session {}",
                dropped, params.session_id
            ));
        }

        let mut cart = Cart::new(params.session_id);
        cart.apply(CartAction::Replace(items))?;

        self.repository.save(&cart).await?;

        self.logger
            .info(&format!("Imported {} cart lines", cart.items().len()));
        Ok(cart)
    }
}
