use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Price;

const DEFAULT_CATEGORY: &str = "Outros";

/// A `products` row read through `to_jsonb`.
///
/// Tables created by the old storefront use Portuguese column names, so every
/// field also accepts its Portuguese alias.
#[derive(Debug, Deserialize)]
pub struct ProductRow {
    pub id: Uuid,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default, alias = "preco")]
    pub price: Value,
    #[serde(default, alias = "promocao")]
    pub is_promo: Option<bool>,
    #[serde(default, alias = "preco_promocional")]
    pub promo_price: Value,
    #[serde(default, alias = "imagem")]
    pub image_url: Option<String>,
    #[serde(default, alias = "disponivel")]
    pub is_available: Option<bool>,
    #[serde(default, alias = "destaque")]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductRow {
    pub fn from_json(value: Value) -> Result<Self, RepositoryError> {
        serde_json::from_value(value).map_err(|_| RepositoryError::Serialization)
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = Price::from_json(&self.price).ok_or(RepositoryError::Serialization)?;
        let created_at = self.created_at.unwrap_or_else(Utc::now);

        Ok(Product::from_repository(
            self.id,
            self.name.trim().to_string(),
            self.description.filter(|d| !d.trim().is_empty()),
            self.category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price,
            self.is_promo.unwrap_or(false),
            Price::from_json(&self.promo_price),
            self.image_url.filter(|i| !i.trim().is_empty()),
            self.is_available.unwrap_or(true),
            self.is_featured.unwrap_or(false),
            created_at,
            self.updated_at.unwrap_or(created_at),
        ))
    }
}
