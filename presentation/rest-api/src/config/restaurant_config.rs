use std::time::Duration;

use super::env::{ConfigError, EnvLookup, flag_or, optional, parsed_or, required};

pub struct RestaurantConfig {
    pub name: String,
    pub whatsapp_number: String,
    pub persist_orders: bool,
    pub catalog_cache_ttl: Duration,
    /// Storefront origin used for payment return URLs.
    pub public_base_url: String,
    pub chat_idle_ttl: Duration,
    pub chat_max_sessions: usize,
}

impl RestaurantConfig {
    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        let whatsapp_number = required(lookup, "WHATSAPP_NUMBER")?;
        if whatsapp_number.chars().filter(char::is_ascii_digit).count() < 10 {
            return Err(ConfigError::Invalid("WHATSAPP_NUMBER"));
        }

        Ok(Self {
            name: optional(lookup, "RESTAURANT_NAME").unwrap_or_else(|| "Restaurante".to_string()),
            whatsapp_number,
            persist_orders: flag_or(lookup, "PERSIST_ORDERS", true)?,
            catalog_cache_ttl: Duration::from_secs(parsed_or(
                lookup,
                "CATALOG_CACHE_TTL_SECS",
                300,
            )?),
            public_base_url: optional(lookup, "PUBLIC_BASE_URL")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
            chat_idle_ttl: Duration::from_secs(parsed_or(lookup, "CHAT_IDLE_TTL_SECS", 7200)?),
            chat_max_sessions: parsed_or(lookup, "CHAT_MAX_SESSIONS", 10_000)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::lookup_from;

    #[test]
    fn should_load_with_defaults() {
        let config =
            RestaurantConfig::from_lookup(&lookup_from(&[("WHATSAPP_NUMBER", "+55 11 99999-0000")]))
                .unwrap();

        assert_eq!(config.name, "Restaurante");
        assert!(config.persist_orders);
        assert_eq!(config.catalog_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.chat_idle_ttl, Duration::from_secs(7200));
        assert_eq!(config.chat_max_sessions, 10_000);
    }

    #[test]
    fn should_reject_non_numeric_chat_limit() {
        let result = RestaurantConfig::from_lookup(&lookup_from(&[
            ("WHATSAPP_NUMBER", "+55 11 99999-0000"),
            ("CHAT_MAX_SESSIONS", "lots"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid("CHAT_MAX_SESSIONS"))));
    }

    #[test]
    fn should_reject_short_whatsapp_number() {
        let result = RestaurantConfig::from_lookup(&lookup_from(&[("WHATSAPP_NUMBER", "1234")]));

        assert!(matches!(result, Err(ConfigError::Invalid("WHATSAPP_NUMBER"))));
    }
}
