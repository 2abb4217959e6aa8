use super::env::{ConfigError, EnvLookup, flag_or, optional};

pub struct PayPalCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub sandbox: bool,
}

/// Provider credentials. A provider is offered only when its credentials are set.
#[derive(Default)]
pub struct PaymentConfig {
    pub mercadopago_access_token: Option<String>,
    pub stripe_secret_key: Option<String>,
    pub paypal: Option<PayPalCredentials>,
    pub abacatepay_api_key: Option<String>,
}

impl PaymentConfig {
    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        let paypal = match (
            optional(lookup, "PAYPAL_CLIENT_ID"),
            optional(lookup, "PAYPAL_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => Some(PayPalCredentials {
                client_id,
                client_secret,
                sandbox: flag_or(lookup, "PAYPAL_SANDBOX", false)?,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("PAYPAL_CLIENT_SECRET")),
            (None, Some(_)) => return Err(ConfigError::Missing("PAYPAL_CLIENT_ID")),
        };

        Ok(Self {
            mercadopago_access_token: optional(lookup, "MERCADOPAGO_ACCESS_TOKEN"),
            stripe_secret_key: optional(lookup, "STRIPE_SECRET_KEY"),
            paypal,
            abacatepay_api_key: optional(lookup, "ABACATEPAY_API_KEY"),
        })
    }
}
