use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::PaymentProvider;

pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// HTTP client shared by the provider adapters.
#[derive(Clone)]
pub struct ProviderClient {
    pub client: Client,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl ProviderClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_default();

        Self {
            client,
            max_attempts: MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Sends the request built by `request`, retrying transport failures,
    /// and returns the JSON body of a successful response.
    pub async fn send_json<F>(
        &self,
        provider: PaymentProvider,
        request: F,
    ) -> Result<Value, PaymentError>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = with_retry(self.max_attempts, self.retry_delay, || request().send())
            .await
            .map_err(|e| {
                tracing::error!("{} request failed: {}", provider, e);
                PaymentError::GatewayFailed
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("{} returned an unreadable body: {}", provider, e);
            PaymentError::GatewayFailed
        })?;

        if !status.is_success() {
            tracing::error!("{} returned status {}: {}", provider, status, body);
            return Err(PaymentError::GatewayFailed);
        }

        Ok(body)
    }
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `operation` up to `attempts` times with a fixed pause between tries.
pub async fn with_retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!("Attempt {}/{} failed: {}", attempt, attempts, e);
                attempt += 1;
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
