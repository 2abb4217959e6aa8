use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::use_cases::reset::{ResetConversationParams, ResetConversationUseCase};
use business::domain::chat::use_cases::send_message::{
    SendChatMessageParams, SendChatMessageUseCase,
};

use crate::api::chat::dto::{ChatReplyResponse, SendChatMessageRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct ChatApi {
    send_message_use_case: Arc<dyn SendChatMessageUseCase>,
    reset_use_case: Arc<dyn ResetConversationUseCase>,
}

impl ChatApi {
    pub fn new(
        send_message_use_case: Arc<dyn SendChatMessageUseCase>,
        reset_use_case: Arc<dyn ResetConversationUseCase>,
    ) -> Self {
        Self {
            send_message_use_case,
            reset_use_case,
        }
    }
}

/// Chat assistant API
#[OpenApi]
impl ChatApi {
    /// Ask the assistant
    ///
    /// The assistant answers using the menu items that match the message.
    #[oai(path = "/chat/messages", method = "post", tag = "ApiTags::Chat")]
    async fn send_message(
        &self,
        session: SessionHeader,
        body: Json<SendChatMessageRequest>,
    ) -> SendMessageResponse {
        match self
            .send_message_use_case
            .execute(SendChatMessageParams {
                session_id: session.0,
                text: body.0.message,
            })
            .await
        {
            Ok(reply) => SendMessageResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendMessageResponse::BadRequest(json),
                    502 => SendMessageResponse::BadGateway(json),
                    _ => SendMessageResponse::InternalError(json),
                }
            }
        }
    }

    /// Start a new conversation
    #[oai(path = "/chat", method = "delete", tag = "ApiTags::Chat")]
    async fn reset(&self, session: SessionHeader) -> ResetChatResponse {
        match self
            .reset_use_case
            .execute(ResetConversationParams {
                session_id: session.0,
            })
            .await
        {
            Ok(()) => ResetChatResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ResetChatResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendMessageResponse {
    #[oai(status = 200)]
    Ok(Json<ChatReplyResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResetChatResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
