use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem, CartTotals};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
    /// Units to add (default: 1)
    #[oai(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity. Zero or less removes the line.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub is_promo: bool,
    pub original_price: f64,
    pub line_total: f64,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name.clone(),
            unit_price: item.unit_price.as_major(),
            quantity: item.quantity,
            image_url: item.image_url.clone(),
            is_promo: item.is_promo,
            original_price: item.original_price.as_major(),
            line_total: item.line_total().as_major(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartTotalsResponse {
    pub item_count: u32,
    pub subtotal: f64,
    pub savings: f64,
    pub total: f64,
    /// Total formatted as `R$ 1.234,50`
    pub total_label: String,
}

impl From<CartTotals> for CartTotalsResponse {
    fn from(totals: CartTotals) -> Self {
        Self {
            item_count: totals.item_count,
            subtotal: totals.subtotal.as_major(),
            savings: totals.savings.as_major(),
            total: totals.total.as_major(),
            total_label: totals.total.to_string(),
        }
    }
}

/// Full cart view returned by every cart operation.
#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub totals: CartTotalsResponse,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            totals: cart.totals().into(),
            updated_at: cart.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartAction;
    use business::domain::shared::value_objects::{Price, SessionId};
    use uuid::Uuid;

    #[test]
    fn should_include_lines_and_totals() {
        let mut cart = Cart::new(SessionId::new("session-1"));
        cart.apply(CartAction::Add(
            CartItem::new(
                Uuid::new_v4(),
                "X-Tudo".to_string(),
                Price::from_cents(2990),
                2,
                None,
                true,
                Price::from_cents(3500),
            )
            .unwrap(),
        ))
        .unwrap();

        let response = CartResponse::from(cart);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].line_total, 59.8);
        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.savings, 10.2);
        assert_eq!(response.totals.total_label, "R$ 59,80");
    }
}
