//! Groq chat-completion client
//!
//! OpenAI-compatible wire format. Single request/response call, no
//! streaming, no retry.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::gateway::parse::parse_chat_completion;
use crate::gateway::{ChatGateway, GatewayError};

/// Model used for all conversions.
pub const MODEL: &str = "moonshotai/kimi-k2-instruct-0905";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Upper bound on the round-trip. The serving side stays responsive even
/// when the API hangs.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Real gateway client backed by reqwest.
#[derive(Debug, Clone)]
pub struct GroqGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqGateway {
    /// Create a client for the given endpoint and credential.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: MODEL.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatGateway for GroqGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(model = %self.model, "sending chat completion request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_chat_completion(&body)
    }
}
