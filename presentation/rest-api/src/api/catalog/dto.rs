use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::catalog::{Catalog, CatalogSection};
use business::domain::product::category::Category;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Price;

/// Admin payload for creating or replacing a product. Prices are in reais.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category name (cannot be empty)
    pub category: String,
    /// Regular price, e.g. 25.90
    pub price: f64,
    #[oai(default)]
    pub is_promo: bool,
    /// Promotional price, used while `is_promo` is set
    #[oai(skip_serializing_if_is_none)]
    pub promo_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(default = "default_true")]
    pub is_available: bool,
    #[oai(default)]
    pub is_featured: bool,
}

fn default_true() -> bool {
    true
}

impl ProductRequest {
    /// Converts the reais amounts to cents, `None` when a price is not a finite number.
    pub fn prices(&self) -> Option<(Price, Option<Price>)> {
        let price = Price::from_major(self.price)?;
        let promo_price = match self.promo_price {
            Some(value) => Some(Price::from_major(value)?),
            None => None,
        };
        Some((price, promo_price))
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub category: String,
    /// Regular price in reais
    pub price: f64,
    pub is_promo: bool,
    #[oai(skip_serializing_if_is_none)]
    pub promo_price: Option<f64>,
    /// Price the customer pays
    pub effective_price: f64,
    /// Effective price formatted as `R$ 1.234,50`
    pub price_label: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let effective_price = product.effective_price();
        Self {
            id: product.id.to_string(),
            effective_price: effective_price.as_major(),
            price_label: effective_price.to_string(),
            name: product.name,
            description: product.description,
            category: product.category,
            price: product.price.as_major(),
            is_promo: product.is_promo,
            promo_price: product.promo_price.map(|p| p.as_major()),
            image_url: product.image_url,
            is_available: product.is_available,
            is_featured: product.is_featured,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogSectionResponse {
    pub category: String,
    pub products: Vec<ProductResponse>,
}

impl From<CatalogSection> for CatalogSectionResponse {
    fn from(section: CatalogSection) -> Self {
        Self {
            category: section.category,
            products: section.products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    pub sections: Vec<CatalogSectionResponse>,
    pub featured: Vec<ProductResponse>,
}

impl From<Catalog> for CatalogResponse {
    fn from(catalog: Catalog) -> Self {
        Self {
            sections: catalog.sections.into_iter().map(|s| s.into()).collect(),
            featured: catalog.featured.into_iter().map(|p| p.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            sort_order: category.sort_order,
        }
    }
}
