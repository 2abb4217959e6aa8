use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_variable: {0}")]
    Invalid(&'static str),
}

/// Source of configuration values, `std::env::var` outside of tests.
pub trait EnvLookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> EnvLookup for F {}

pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Non-blank value of `name`.
pub fn optional(lookup: &impl EnvLookup, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(lookup: &impl EnvLookup, name: &'static str) -> Result<String, ConfigError> {
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

pub fn parsed_or<T: FromStr>(
    lookup: &impl EnvLookup,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match optional(lookup, name) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid(name)),
        None => Ok(default),
    }
}

/// Accepts `true/false`, `1/0`, `yes/no`.
pub fn flag_or(
    lookup: &impl EnvLookup,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match optional(lookup, name).map(|v| v.to_lowercase()).as_deref() {
        None => Ok(default),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some("false") | Some("0") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::Invalid(name)),
    }
}

#[cfg(test)]
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_as_missing() {
        let lookup = lookup_from(&[("DATABASE_URL", "   ")]);

        let result = required(&lookup, "DATABASE_URL");

        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn should_parse_or_fall_back_to_default() {
        let lookup = lookup_from(&[("DATABASE_MAX_CONNECTIONS", "12")]);

        assert_eq!(parsed_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32).unwrap(), 12);
        assert_eq!(parsed_or(&lookup, "CATALOG_CACHE_TTL_SECS", 300u64).unwrap(), 300);
    }

    #[test]
    fn should_reject_unparseable_number() {
        let lookup = lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")]);

        let result = parsed_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32);

        assert!(matches!(result, Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))));
    }

    #[test]
    fn should_read_flags() {
        let lookup = lookup_from(&[("PERSIST_ORDERS", "No"), ("PAYPAL_SANDBOX", "1")]);

        assert!(!flag_or(&lookup, "PERSIST_ORDERS", true).unwrap());
        assert!(flag_or(&lookup, "PAYPAL_SANDBOX", false).unwrap());
        assert!(flag_or(&lookup, "RUN_MIGRATIONS", true).unwrap());
    }
}
