//! LLM gateway client
//!
//! Wraps the outbound chat-completion call. `GroqGateway` is the real
//! client; `FakeGateway` answers from canned data for tests.

mod fake;
mod groq;
mod parse;

pub use fake::FakeGateway;
pub use groq::GroqGateway;
pub use parse::parse_chat_completion;

use async_trait::async_trait;

/// Gateway errors. Every kind maps to the same generic 500 for clients;
/// the distinction exists for server-side logging.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Connection failure, timeout, TLS error.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status from the API.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body did not match the chat-completion schema.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Network(err.to_string())
    }
}

/// One round-trip to a chat-completion API.
///
/// Implementations compose the fixed two-message exchange (`system`, then
/// `user`) and return the trimmed content of the first completion choice.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;
}
