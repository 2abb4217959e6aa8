use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            OrderError::EmptyCart => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "checkout.empty_cart")
            }
            OrderError::MissingProfile => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.missing_profile",
            ),
            // Report which profile field failed
            OrderError::InvalidProfile(inner) => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &inner.to_string())
            }
            OrderError::ItemUnavailable(name) => {
                let (status, mut json) = error_response(
                    StatusCode::CONFLICT,
                    "Conflict",
                    "checkout.item_unavailable",
                );
                json.0.detail = Some(name);
                (status, json)
            }
            OrderError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "order.not_found")
            }
            OrderError::InvalidWhatsappNumber => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "ConfigurationError",
                "checkout.invalid_whatsapp_number",
            ),
            OrderError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::profile::errors::ProfileError;

    #[test]
    fn should_name_unavailable_item() {
        let (status, json) =
            OrderError::ItemUnavailable("X-Burger".to_string()).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "checkout.item_unavailable");
        assert_eq!(json.0.detail.as_deref(), Some("X-Burger"));
    }

    #[test]
    fn should_surface_profile_validation_code() {
        let (status, json) =
            OrderError::InvalidProfile(ProfileError::InvalidPhone).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "profile.invalid_phone");
    }
}
