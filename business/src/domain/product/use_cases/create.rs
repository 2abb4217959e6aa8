use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Price;

pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub is_promo: bool,
    pub promo_price: Option<Price>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
