use poem::middleware::Cors;

use super::admin_config::AdminConfig;
use super::database_config::DatabaseSettings;
use super::env::{ConfigError, EnvLookup, process_env};
use super::openai_config::OpenAIConfig;
use super::payment_config::PaymentConfig;
use super::restaurant_config::RestaurantConfig;
use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub openai: OpenAIConfig,
    pub restaurant: RestaurantConfig,
    pub payment: PaymentConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup),
            cors: cors_config::init_cors(lookup),
            database: DatabaseSettings::from_lookup(lookup)?,
            openai: OpenAIConfig::from_lookup(lookup)?,
            restaurant: RestaurantConfig::from_lookup(lookup)?,
            payment: PaymentConfig::from_lookup(lookup)?,
            admin: AdminConfig::from_lookup(lookup)?,
        })
    }
}
