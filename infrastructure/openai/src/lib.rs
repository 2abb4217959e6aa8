pub mod chat_assistant;
pub mod client;

pub use chat_assistant::ChatAssistantOpenAI;
pub use client::OpenAIClient;
