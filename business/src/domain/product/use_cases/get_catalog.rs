use async_trait::async_trait;

use crate::domain::product::catalog::Catalog;
use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Catalog, ProductError>;
}
