use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::InvalidQuantity | CartError::QuantityLimitExceeded | CartError::InvalidItem => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            CartError::ItemNotFound | CartError::ProductNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &self.to_string())
            }
            CartError::ProductUnavailable => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "cart.product_unavailable",
            ),
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
