use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::payment::errors::PaymentError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for PaymentError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            PaymentError::ProviderUnavailable => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "payment.provider_unavailable",
            ),
            PaymentError::OrderNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "payment.order_not_found")
            }
            PaymentError::AlreadyPaid | PaymentError::OrderCancelled => {
                error_response(StatusCode::CONFLICT, "Conflict", &self.to_string())
            }
            PaymentError::GatewayFailed => error_response(
                StatusCode::BAD_GATEWAY,
                "PaymentGatewayError",
                "payment.gateway_failed",
            ),
            PaymentError::Repository(_) => error_response(
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

    #[test]
    fn should_map_already_paid_to_conflict() {
        let (status, json) = PaymentError::AlreadyPaid.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "payment.already_paid");
    }
}
