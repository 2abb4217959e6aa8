use async_trait::async_trait;

use super::errors::PaymentError;
use super::model::{PaymentProvider, PaymentRequest, PaymentSession};

/// Service port for one hosted payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn provider(&self) -> PaymentProvider;

    async fn create_checkout(&self, request: &PaymentRequest)
    -> Result<PaymentSession, PaymentError>;
}
