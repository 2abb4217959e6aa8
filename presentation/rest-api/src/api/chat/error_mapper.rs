use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ChatError::MessageEmpty | ChatError::MessageTooLong => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            ChatError::CompletionFailed => error_response(
                StatusCode::BAD_GATEWAY,
                "AssistantError",
                "chat.completion_failed",
            ),
            ChatError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
