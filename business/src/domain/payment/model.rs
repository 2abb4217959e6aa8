use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentProvider {
    MercadoPago,
    Stripe,
    PayPal,
    AbacatePay,
}

impl PaymentProvider {
    pub const ALL: [PaymentProvider; 4] = [
        PaymentProvider::MercadoPago,
        PaymentProvider::Stripe,
        PaymentProvider::PayPal,
        PaymentProvider::AbacatePay,
    ];

    /// Human readable name shown to customers.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentProvider::MercadoPago => "Mercado Pago",
            PaymentProvider::Stripe => "Stripe",
            PaymentProvider::PayPal => "PayPal",
            PaymentProvider::AbacatePay => "AbacatePay",
        }
    }
}

impl std::fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentProvider::MercadoPago => write!(f, "mercadopago"),
            PaymentProvider::Stripe => write!(f, "stripe"),
            PaymentProvider::PayPal => write!(f, "paypal"),
            PaymentProvider::AbacatePay => write!(f, "abacatepay"),
        }
    }
}

impl std::str::FromStr for PaymentProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mercadopago" => Ok(PaymentProvider::MercadoPago),
            "stripe" => Ok(PaymentProvider::Stripe),
            "paypal" => Ok(PaymentProvider::PayPal),
            "abacatepay" => Ok(PaymentProvider::AbacatePay),
            _ => Err(format!("Invalid payment provider: {}", s)),
        }
    }
}

/// Key sent with provider requests so a retried checkout creates one charge.
pub fn idempotency_key(order_id: Uuid, provider: PaymentProvider) -> String {
    let digest = Sha256::digest(format!("{}:{}", order_id, provider).as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLine {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

/// Everything a provider adapter needs to open a hosted checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub provider: PaymentProvider,
    pub order_id: Uuid,
    pub reference: String,
    pub lines: Vec<PaymentLine>,
    pub total: Price,
    pub customer_name: String,
    pub customer_phone: String,
    pub success_url: String,
    pub failure_url: String,
    pub idempotency_key: String,
}

impl PaymentRequest {
    pub fn from_order(order: &Order, provider: PaymentProvider, public_base_url: &str) -> Self {
        let base = public_base_url.trim_end_matches('/');
        Self {
            provider,
            order_id: order.id,
            reference: order.reference.clone(),
            lines: order
                .items
                .iter()
                .map(|i| PaymentLine {
                    product_id: i.product_id,
                    name: i.name.clone(),
                    unit_price: i.unit_price,
                    quantity: i.quantity,
                })
                .collect(),
            total: order.total,
            customer_name: order.customer.name.clone(),
            customer_phone: order.customer.phone.clone(),
            success_url: format!("{}/pedido/{}?status=success", base, order.reference),
            failure_url: format!("{}/pedido/{}?status=failure", base, order.reference),
            idempotency_key: idempotency_key(order.id, provider),
        }
    }
}

/// Hosted checkout opened at a provider. The customer is sent to `redirect_url`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    pub provider: PaymentProvider,
    pub external_id: String,
    pub redirect_url: String,
}
