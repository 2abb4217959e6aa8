use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::{PaymentProvider, PaymentRequest, PaymentSession};
use business::domain::payment::services::PaymentGateway;

use crate::client::ProviderClient;

const PREFERENCES_URL: &str = "https://api.mercadopago.com/checkout/preferences";

/// Checkout Pro preferences.
pub struct MercadoPagoGateway {
    client: ProviderClient,
    access_token: String,
}

impl MercadoPagoGateway {
    pub fn new(client: ProviderClient, access_token: String) -> Self {
        Self {
            client,
            access_token,
        }
    }

    fn build_body(request: &PaymentRequest) -> Value {
        let items: Vec<Value> = request
            .lines
            .iter()
            .map(|line| {
                json!({
                    "id": line.product_id.to_string(),
                    "title": line.name,
                    "quantity": line.quantity,
                    "unit_price": line.unit_price.as_major(),
                    "currency_id": "BRL",
                })
            })
            .collect();

        json!({
            "items": items,
            "external_reference": request.reference,
            "payer": { "name": request.customer_name },
            "back_urls": {
                "success": request.success_url,
                "failure": request.failure_url,
                "pending": request.success_url,
            },
            "auto_return": "approved",
            "metadata": { "order_id": request.order_id.to_string() },
        })
    }

    fn parse_response(data: &Value) -> Result<PaymentSession, PaymentError> {
        let external_id = data["id"].as_str().ok_or(PaymentError::GatewayFailed)?;
        let redirect_url = data["init_point"].as_str().ok_or(PaymentError::GatewayFailed)?;

        Ok(PaymentSession {
            provider: PaymentProvider::MercadoPago,
            external_id: external_id.to_string(),
            redirect_url: redirect_url.to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::MercadoPago
    }

    async fn create_checkout(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, PaymentError> {
        let body = Self::build_body(request);

        let data = self
            .client
            .send_json(PaymentProvider::MercadoPago, || {
                self.client
                    .client
                    .post(PREFERENCES_URL)
                    .bearer_auth(&self.access_token)
                    .header("X-Idempotency-Key", &request.idempotency_key)
                    .json(&body)
            })
            .await?;

        Self::parse_response(&data)
    }
}
