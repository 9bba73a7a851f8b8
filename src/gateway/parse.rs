//! Chat-completion response parsing
//!
//! Standalone so tests can run it against fixture strings without a live
//! endpoint.

use serde::Deserialize;

use crate::gateway::GatewayError;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the trimmed content of the first completion choice.
pub fn parse_chat_completion(body: &str) -> Result<String, GatewayError> {
    let completion: ChatCompletion = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("malformed completion: {e}")))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| GatewayError::InvalidResponse("no completion choices".to_string()))?;

    Ok(content.trim().to_string())
}
