use async_trait::async_trait;

use crate::domain::product::category::Category;
use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, ProductError>;
}
