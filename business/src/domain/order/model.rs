use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::{OrderStatus, PaymentMethod};
use crate::domain::cart::model::Cart;
use crate::domain::profile::model::DeliveryProfile;
use crate::domain::shared::value_objects::{Price, SessionId};

const REFERENCE_PREFIX: &str = "PED-";
const REFERENCE_LENGTH: usize = 5;
// No 0/O or 1/I so customers can read the code back over the phone
const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Delivery details copied from the profile when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSnapshot {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub reference: String,
    pub session_id: SessionId,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub customer: CustomerSnapshot,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Turns a cart and a delivery profile into a pending order.
    pub fn place(
        cart: &Cart,
        profile: &DeliveryProfile,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        profile.validate()?;

        let items: Vec<OrderItem> = cart
            .items()
            .iter()
            .map(|i| OrderItem {
                product_id: i.product_id,
                name: i.name.clone(),
                unit_price: i.unit_price,
                quantity: i.quantity,
            })
            .collect();

        let notes = notes
            .or_else(|| profile.notes.clone())
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            reference: generate_reference(),
            session_id: cart.session_id.clone(),
            total: cart.totals().total,
            items,
            customer: CustomerSnapshot {
                name: profile.name.clone(),
                phone: profile.phone.clone(),
                address: profile.full_address(),
            },
            payment_method,
            notes,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        reference: String,
        session_id: SessionId,
        items: Vec<OrderItem>,
        total: Price,
        customer: CustomerSnapshot,
        payment_method: PaymentMethod,
        notes: Option<String>,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reference,
            session_id,
            items,
            total,
            customer,
            payment_method,
            notes,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

/// Short human-readable code such as `PED-7K3QX`.
pub fn generate_reference() -> String {
    let mut rng = rand::rng();
    let code: String = (0..REFERENCE_LENGTH)
        .map(|_| REFERENCE_ALPHABET[rng.random_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", REFERENCE_PREFIX, code)
}
