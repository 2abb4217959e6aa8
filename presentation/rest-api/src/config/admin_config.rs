use super::env::{ConfigError, EnvLookup, required};

/// Key expected in the `X-Api-Key` header of catalog mutations.
#[derive(Clone)]
pub struct AdminConfig {
    pub api_key: String,
}

impl AdminConfig {
    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: required(lookup, "ADMIN_API_KEY")?,
        })
    }
}
