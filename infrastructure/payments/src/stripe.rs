use async_trait::async_trait;
use serde_json::Value;

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::{PaymentProvider, PaymentRequest, PaymentSession};
use business::domain::payment::services::PaymentGateway;

use crate::client::ProviderClient;

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Stripe Checkout Sessions. The API takes form-encoded bodies.
pub struct StripeGateway {
    client: ProviderClient,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(client: ProviderClient, secret_key: String) -> Self {
        Self { client, secret_key }
    }

    fn build_form(request: &PaymentRequest) -> Vec<(String, String)> {
        let mut form = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.failure_url.clone()),
            ("client_reference_id".to_string(), request.reference.clone()),
            ("metadata[order_id]".to_string(), request.order_id.to_string()),
        ];

        for (i, line) in request.lines.iter().enumerate() {
            let prefix = format!("line_items[{}]", i);
            form.push((format!("{}[price_data][currency]", prefix), "brl".to_string()));
            form.push((
                format!("{}[price_data][product_data][name]", prefix),
                line.name.clone(),
            ));
            form.push((
                format!("{}[price_data][unit_amount]", prefix),
                line.unit_price.cents().to_string(),
            ));
            form.push((format!("{}[quantity]", prefix), line.quantity.to_string()));
        }

        form
    }

    fn parse_response(data: &Value) -> Result<PaymentSession, PaymentError> {
        let external_id = data["id"].as_str().ok_or(PaymentError::GatewayFailed)?;
        let redirect_url = data["url"].as_str().ok_or(PaymentError::GatewayFailed)?;

        Ok(PaymentSession {
            provider: PaymentProvider::Stripe,
            external_id: external_id.to_string(),
            redirect_url: redirect_url.to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Stripe
    }

    async fn create_checkout(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, PaymentError> {
        let form = Self::build_form(request);

        let data = self
            .client
            .send_json(PaymentProvider::Stripe, || {
                self.client
                    .client
                    .post(CHECKOUT_SESSIONS_URL)
                    .bearer_auth(&self.secret_key)
                    .header("Idempotency-Key", &request.idempotency_key)
                    .form(&form)
            })
            .await?;

        Self::parse_response(&data)
    }
}
