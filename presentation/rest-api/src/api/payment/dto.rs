use poem_openapi::Object;

use business::domain::payment::model::{PaymentProvider, PaymentSession};

#[derive(Debug, Clone, Object)]
pub struct PaymentProviderResponse {
    /// Identifier to send back when starting a payment
    pub id: String,
    pub label: String,
}

impl From<PaymentProvider> for PaymentProviderResponse {
    fn from(provider: PaymentProvider) -> Self {
        Self {
            id: provider.to_string(),
            label: provider.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct InitiatePaymentRequest {
    pub order_id: String,
    /// One of the ids returned by `GET /payments/providers`
    pub provider: String,
}

#[derive(Debug, Clone, Object)]
pub struct PaymentSessionResponse {
    pub provider: String,
    /// Checkout id at the provider
    pub external_id: String,
    /// Hosted checkout page the customer is sent to
    pub redirect_url: String,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            provider: session.provider.to_string(),
            external_id: session.external_id,
            redirect_url: session.redirect_url,
        }
    }
}
