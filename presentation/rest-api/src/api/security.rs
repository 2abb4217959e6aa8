use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};
use regex::Regex;

use business::domain::shared::value_objects::SessionId;

use crate::config::admin_config::AdminConfig;

static SESSION_ID_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{8,128}$").ok());

/// Opaque session identifier generated by the storefront.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Session-Id",
    key_in = "header",
    checker = "session_checker"
)]
pub struct SessionHeader(pub SessionId);

async fn session_checker(_req: &Request, api_key: ApiKey) -> Option<SessionId> {
    if is_valid_session_id(&api_key.key) {
        Some(SessionId::new(api_key.key))
    } else {
        tracing::warn!("Rejected malformed session id");
        None
    }
}

fn is_valid_session_id(value: &str) -> bool {
    SESSION_ID_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Admin key for catalog mutations.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Api-Key",
    key_in = "header",
    checker = "admin_key_checker"
)]
#[allow(dead_code)]
pub struct AdminKey(pub ());

async fn admin_key_checker(req: &Request, api_key: ApiKey) -> Option<()> {
    let Some(config) = req.data::<AdminConfig>() else {
        tracing::error!("Admin key is not configured");
        return None;
    };

    if keys_match(&config.api_key, &api_key.key) {
        Some(())
    } else {
        tracing::warn!("Rejected invalid admin key");
        None
    }
}

/// Compares without short-circuiting on the first differing byte.
fn keys_match(expected: &str, provided: &str) -> bool {
    let expected = expected.as_bytes();
    let provided = provided.as_bytes();
    if expected.len() != provided.len() {
        return false;
    }
    expected
        .iter()
        .zip(provided)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
