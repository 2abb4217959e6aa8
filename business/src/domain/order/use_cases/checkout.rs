use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::shared::value_objects::SessionId;

pub struct CheckoutParams {
    pub session_id: SessionId,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

/// Outcome of a checkout: the order plus the WhatsApp hand-off.
#[derive(Debug, Clone)]
pub struct CheckoutResult {
    pub order: Order,
    /// False when order persistence is disabled or the write failed.
    pub persisted: bool,
    pub message: String,
    pub whatsapp_url: String,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutResult, OrderError>;
}
