use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::value_objects::{Price, SessionId};

/// One line of the `items` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemRecord {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_promo: bool,
    pub original_price: Price,
}

impl From<&CartItem> for CartItemRecord {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            image_url: item.image_url.clone(),
            is_promo: item.is_promo,
            original_price: item.original_price,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub session_id: String,
    pub items: Json<Vec<CartItemRecord>>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    /// Lines that no longer pass cart validation are dropped.
    pub fn into_domain(self) -> Cart {
        let items = self
            .items
            .0
            .into_iter()
            .filter_map(|r| {
                CartItem::new(
                    r.product_id,
                    r.name,
                    r.unit_price,
                    r.quantity,
                    r.image_url,
                    r.is_promo,
                    r.original_price,
                )
                .ok()
            })
            .collect();

        Cart::from_repository(SessionId::new(self.session_id), items, self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_drop_invalid_stored_lines() {
        let items: Vec<CartItemRecord> = serde_json::from_value(json!([
            {"product_id": "5b0f0a4e-3f7a-4c1e-9d55-0c6a3b1f2e10", "name": "Coxinha", "unit_price": 700, "quantity": 3, "original_price": 700},
            {"product_id": "5b0f0a4e-3f7a-4c1e-9d55-0c6a3b1f2e11", "name": "Zero", "unit_price": 700, "quantity": 0, "original_price": 700}
        ]))
        .unwrap();
        let entity = CartEntity {
            session_id: "session-1".to_string(),
            items: Json(items),
            updated_at: Utc::now(),
        };

        let cart = entity.into_domain();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.totals().total, Price::from_cents(2100));
    }
}
