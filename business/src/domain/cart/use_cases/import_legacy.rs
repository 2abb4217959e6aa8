use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct ImportLegacyCartParams {
    pub session_id: SessionId,
    /// Raw snapshot as the old storefront kept it in local storage.
    pub snapshot: serde_json::Value,
}

#[async_trait]
pub trait ImportLegacyCartUseCase: Send + Sync {
    async fn execute(&self, params: ImportLegacyCartParams) -> Result<Cart, CartError>;
}
