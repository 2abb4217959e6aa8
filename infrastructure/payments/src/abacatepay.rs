use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::{PaymentProvider, PaymentRequest, PaymentSession};
use business::domain::payment::services::PaymentGateway;

use crate::client::ProviderClient;

const BILLING_URL: &str = "https://api.abacatepay.com/v1/billing/create";

/// One-time Pix billing.
pub struct AbacatePayGateway {
    client: ProviderClient,
    api_key: String,
}

impl AbacatePayGateway {
    pub fn new(client: ProviderClient, api_key: String) -> Self {
        Self { client, api_key }
    }

    fn build_body(request: &PaymentRequest) -> Value {
        let products: Vec<Value> = request
            .lines
            .iter()
            .map(|line| {
                json!({
                    "externalId": line.product_id.to_string(),
                    "name": line.name,
                    "quantity": line.quantity,
                    "price": line.unit_price.cents(),
                })
            })
            .collect();

        json!({
            "frequency": "ONE_TIME",
            "methods": ["PIX"],
            "products": products,
            "returnUrl": request.failure_url,
            "completionUrl": request.success_url,
            "metadata": {
                "orderId": request.order_id.to_string(),
                "reference": request.reference,
            },
        })
    }

    /// Responses wrap the billing in `{data, error}`.
    fn parse_response(data: &Value) -> Result<PaymentSession, PaymentError> {
        if let Some(error) = data["error"].as_str() {
            tracing::error!("AbacatePay rejected billing: {}", error);
            return Err(PaymentError::GatewayFailed);
        }

        let billing = &data["data"];
        let external_id = billing["id"].as_str().ok_or(PaymentError::GatewayFailed)?;
        let redirect_url = billing["url"].as_str().ok_or(PaymentError::GatewayFailed)?;

        Ok(PaymentSession {
            provider: PaymentProvider::AbacatePay,
            external_id: external_id.to_string(),
            redirect_url: redirect_url.to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for AbacatePayGateway {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::AbacatePay
    }

    async fn create_checkout(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, PaymentError> {
        let body = Self::build_body(request);

        let data = self
            .client
            .send_json(PaymentProvider::AbacatePay, || {
                self.client
                    .client
                    .post(BILLING_URL)
                    .bearer_auth(&self.api_key)
                    .header("Idempotency-Key", &request.idempotency_key)
                    .json(&body)
            })
            .await?;

        Self::parse_response(&data)
    }
}
