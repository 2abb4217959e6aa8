use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductRow;
use crate::money::price_to_decimal;
use crate::table::Table;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all_rows(&self) -> Result<Vec<Product>, RepositoryError> {
        // Rows go through to_jsonb so both column naming schemes decode the same way
        let rows: Vec<(Json<Value>,)> =
            sqlx::query_as(&format!("SELECT to_jsonb(p) FROM {} p", Table::Products))
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        let mut products: Vec<Product> = rows
            .into_iter()
            .filter_map(|(Json(value),)| {
                match ProductRow::from_json(value).and_then(ProductRow::into_domain) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable product row: {}", e);
                        None
                    }
                }
            })
            .collect();

        products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_all_rows().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let (Json(value),): (Json<Value>,) = sqlx::query_as(&format!(
            "SELECT to_jsonb(p) FROM {} p WHERE p.id = $1",
            Table::Products
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        ProductRow::from_json(value)?.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            r#"INSERT INTO {} (id, name, description, category, price, is_promo, promo_price, image_url, is_available, is_featured, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                category = EXCLUDED.category,
                price = EXCLUDED.price,
                is_promo = EXCLUDED.is_promo,
                promo_price = EXCLUDED.promo_price,
                image_url = EXCLUDED.image_url,
                is_available = EXCLUDED.is_available,
                is_featured = EXCLUDED.is_featured,
                updated_at = EXCLUDED.updated_at"#,
            Table::Products
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(price_to_decimal(product.price))
        .bind(product.is_promo)
        .bind(product.promo_price.map(price_to_decimal))
        .bind(&product.image_url)
        .bind(product.is_available)
        .bind(product.is_featured)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {} WHERE id = $1", Table::Products))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_available(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.get_all().await?;
        Ok(products.into_iter().filter(|p| p.is_available).collect())
    }
}
