use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::{PaymentProvider, PaymentRequest, PaymentSession};
use business::domain::payment::services::PaymentGateway;

use crate::client::ProviderClient;

const LIVE_BASE_URL: &str = "https://api-m.paypal.com";
const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
// Refresh tokens a bit before PayPal expires them
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// PayPal Orders v2 with OAuth client credentials.
pub struct PayPalGateway {
    client: ProviderClient,
    client_id: String,
    client_secret: String,
    base_url: &'static str,
    token: Mutex<Option<AccessToken>>,
}

impl PayPalGateway {
    pub fn new(
        client: ProviderClient,
        client_id: String,
        client_secret: String,
        sandbox: bool,
    ) -> Self {
        Self {
            client,
            client_id,
            client_secret,
            base_url: if sandbox { SANDBOX_BASE_URL } else { LIVE_BASE_URL },
            token: Mutex::new(None),
        }
    }

    async fn access_token(&self) -> Result<String, PaymentError> {
        let mut token = self.token.lock().await;
        if let Some(cached) = token.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.value.clone());
            }
        }

        let url = format!("{}/v1/oauth2/token", self.base_url);
        let data = self
            .client
            .send_json(PaymentProvider::PayPal, || {
                self.client
                    .client
                    .post(&url)
                    .basic_auth(&self.client_id, Some(&self.client_secret))
                    .form(&[("grant_type", "client_credentials")])
            })
            .await?;

        let fresh = Self::parse_token(&data, Instant::now())?;
        let value = fresh.value.clone();
        *token = Some(fresh);
        Ok(value)
    }

    fn parse_token(data: &Value, now: Instant) -> Result<AccessToken, PaymentError> {
        let value = data["access_token"]
            .as_str()
            .ok_or(PaymentError::GatewayFailed)?;
        let expires_in = Duration::from_secs(data["expires_in"].as_u64().unwrap_or(0));

        Ok(AccessToken {
            value: value.to_string(),
            expires_at: now + expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN),
        })
    }

    fn build_body(request: &PaymentRequest) -> Value {
        let total = request.total.to_decimal_string();
        let items: Vec<Value> = request
            .lines
            .iter()
            .map(|line| {
                json!({
                    "name": line.name,
                    "quantity": line.quantity.to_string(),
                    "unit_amount": {
                        "currency_code": "BRL",
                        "value": line.unit_price.to_decimal_string(),
                    },
                })
            })
            .collect();

        json!({
            "intent": "CAPTURE",
            "purchase_units": [{
                "reference_id": request.reference,
                "custom_id": request.order_id.to_string(),
                "amount": {
                    "currency_code": "BRL",
                    "value": total,
                    "breakdown": {
                        "item_total": { "currency_code": "BRL", "value": total },
                    },
                },
                "items": items,
            }],
            "application_context": {
                "return_url": request.success_url,
                "cancel_url": request.failure_url,
                "user_action": "PAY_NOW",
            },
        })
    }

    fn parse_response(data: &Value) -> Result<PaymentSession, PaymentError> {
        let external_id = data["id"].as_str().ok_or(PaymentError::GatewayFailed)?;
        let redirect_url = data["links"]
            .as_array()
            .and_then(|links| {
                links.iter().find(|link| {
                    matches!(link["rel"].as_str(), Some("approve") | Some("payer-action"))
                })
            })
            .and_then(|link| link["href"].as_str())
            .ok_or(PaymentError::GatewayFailed)?;

        Ok(PaymentSession {
            provider: PaymentProvider::PayPal,
            external_id: external_id.to_string(),
            redirect_url: redirect_url.to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::PayPal
    }

    async fn create_checkout(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, PaymentError> {
        let access_token = self.access_token().await?;
        let body = Self::build_body(request);
        let url = format!("{}/v2/checkout/orders", self.base_url);

        let data = self
            .client
            .send_json(PaymentProvider::PayPal, || {
                self.client
                    .client
                    .post(&url)
                    .bearer_auth(&access_token)
                    .header("PayPal-Request-Id", &request.idempotency_key)
                    .json(&body)
            })
            .await?;

        Self::parse_response(&data)
    }
}
