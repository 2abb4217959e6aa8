use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::model::{PaymentProvider, PaymentSession};

pub struct InitiatePaymentParams {
    pub order_id: Uuid,
    pub provider: PaymentProvider,
}

#[async_trait]
pub trait InitiatePaymentUseCase: Send + Sync {
    async fn execute(&self, params: InitiatePaymentParams)
    -> Result<PaymentSession, PaymentError>;
}
