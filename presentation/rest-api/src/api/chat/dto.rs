use poem_openapi::Object;

use business::domain::chat::model::ChatReply;

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct SendChatMessageRequest {
    /// Customer message, up to 1000 characters
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChatReplyResponse {
    pub reply: String,
    /// Menu items the reply refers to, so the widget can offer "add to cart"
    pub products: Vec<ProductResponse>,
}

impl From<ChatReply> for ChatReplyResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.message,
            products: reply.products.into_iter().map(|p| p.into()).collect(),
        }
    }
}
