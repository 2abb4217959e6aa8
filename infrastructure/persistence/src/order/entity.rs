use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{CustomerSnapshot, Order, OrderItem};
use business::domain::order::value_objects::{OrderStatus, PaymentMethod};
use business::domain::shared::value_objects::{Price, SessionId};

use crate::money::decimal_to_price;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl From<&OrderItem> for OrderItemRecord {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub reference: String,
    pub session_id: String,
    pub items: Json<Vec<OrderItemRecord>>,
    pub total: BigDecimal,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub payment_method: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let total = decimal_to_price(&self.total).ok_or(RepositoryError::Serialization)?;
        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| RepositoryError::Serialization)?;

        Ok(Order::from_repository(
            self.id,
            self.reference,
            SessionId::new(self.session_id),
            self.items
                .0
                .into_iter()
                .map(|r| OrderItem {
                    product_id: r.product_id,
                    name: r.name,
                    unit_price: r.unit_price,
                    quantity: r.quantity,
                })
                .collect(),
            total,
            CustomerSnapshot {
                name: self.customer_name,
                phone: self.customer_phone,
                address: self.customer_address,
            },
            payment_method,
            self.notes,
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.created_at,
            self.updated_at,
        ))
    }
}
