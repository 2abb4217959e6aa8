use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::use_cases::checkout::CheckoutResult;

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// `pix`, `cash`, `card_on_delivery` or an online provider
    /// (`mercadopago`, `stripe`, `paypal`, `abacatepay`)
    pub payment_method: String,
    /// Overrides the notes saved in the delivery profile
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            unit_price: item.unit_price.as_major(),
            line_total: item.line_total().as_major(),
            name: item.name,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    /// Short code shown to the customer, e.g. `PED-7K3QX`
    pub reference: String,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub payment_method: String,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// `pending`, `awaiting_payment`, `paid` or `cancelled`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            reference: order.reference,
            items: order.items.into_iter().map(|i| i.into()).collect(),
            total: order.total.as_major(),
            customer_name: order.customer.name,
            customer_phone: order.customer.phone,
            customer_address: order.customer.address,
            payment_method: order.payment_method.to_string(),
            notes: order.notes,
            status: order.status.to_string(),
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    pub order: OrderResponse,
    /// False when order storage is disabled or failed; the WhatsApp hand-off still works
    pub persisted: bool,
    pub message: String,
    /// `https://wa.me/...` link that opens the chat with the message filled in
    pub whatsapp_url: String,
}

impl From<CheckoutResult> for CheckoutResponse {
    fn from(result: CheckoutResult) -> Self {
        Self {
            order: result.order.into(),
            persisted: result.persisted,
            message: result.message,
            whatsapp_url: result.whatsapp_url,
        }
    }
}
