use poem::middleware::Cors;

use super::env::{EnvLookup, optional};

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for the storefront
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///
/// The storefront sends the session and admin keys as custom headers,
/// so both must be allowed.
pub fn init_cors(lookup: &impl EnvLookup) -> Cors {
    let allowed_origins =
        optional(lookup, "CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "x-session-id", "x-api-key"])
        .allow_credentials(true)
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = parse_origins("https://loja.example, http://localhost:5173,,");

        assert_eq!(origins, vec!["https://loja.example", "http://localhost:5173"]);
    }
}
