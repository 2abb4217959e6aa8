use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

use super::entity::{OrderEntity, OrderItemRecord};
use crate::money::price_to_decimal;
use crate::table::Table;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT id, reference, session_id, items, total, customer_name, customer_phone, customer_address, payment_method, notes, status, created_at, updated_at FROM {} WHERE id = $1",
            Table::Orders
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let items: Vec<OrderItemRecord> = order.items.iter().map(OrderItemRecord::from).collect();

        sqlx::query(&format!(
            r#"INSERT INTO {} (id, reference, session_id, items, total, customer_name, customer_phone, customer_address, payment_method, notes, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                payment_method = EXCLUDED.payment_method,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at"#,
            Table::Orders
        ))
        .bind(order.id)
        .bind(&order.reference)
        .bind(order.session_id.as_str())
        .bind(Json(items))
        .bind(price_to_decimal(order.total))
        .bind(&order.customer.name)
        .bind(&order.customer.phone)
        .bind(&order.customer.address)
        .bind(order.payment_method.to_string())
        .bind(&order.notes)
        .bind(order.status.to_string())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
