use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

use super::entity::{CartEntity, CartItemRecord};
use crate::table::Table;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT session_id, items, updated_at FROM {} WHERE session_id = $1",
            Table::Carts
        ))
        .bind(session_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let items: Vec<CartItemRecord> = cart.items().iter().map(CartItemRecord::from).collect();

        sqlx::query(&format!(
            r#"INSERT INTO {} (session_id, items, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (session_id) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = EXCLUDED.updated_at"#,
            Table::Carts
        ))
        .bind(cart.session_id.as_str())
        .bind(Json(items))
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {} WHERE session_id = $1", Table::Carts))
            .bind(session_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
