use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::profile::errors::ProfileError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProfileError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProfileError::NameEmpty | ProfileError::AddressEmpty | ProfileError::InvalidPhone => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            ProfileError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "profile.not_found")
            }
            ProfileError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
