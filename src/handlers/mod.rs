//! HTTP request handlers
//!
//! The conversion endpoint plus the diagnostic time endpoint. Static asset
//! routes are wired in the server module.

use std::sync::Arc;

use axum::{
    debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::gateway::ChatGateway;
use crate::prompts::{self, Audience, SYSTEM_PROMPT};

/// Shared state handed to every handler.
pub struct ApiState {
    /// Gateway the conversion endpoint calls out through.
    pub gateway: Arc<dyn ChatGateway>,
}

/// Body of `POST /convert`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_audience: String,
}

/// Successful conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub converted_text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// User-facing conversion failures. Messages are complete as-is; gateway
/// detail stays in the server log.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("텍스트와 변환 대상을 모두 제공해야 합니다.")]
    MissingFields,

    #[error("유효하지 않은 변환 대상입니다.")]
    InvalidAudience,

    #[error("텍스트 변환 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.")]
    Gateway,
}

impl ConvertError {
    fn status(&self) -> StatusCode {
        match self {
            ConvertError::MissingFields | ConvertError::InvalidAudience => {
                StatusCode::BAD_REQUEST
            }
            ConvertError::Gateway => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Convert user text into the register appropriate for the target audience.
#[debug_handler]
pub async fn convert(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ConvertError> {
    if request.text.trim().is_empty() || request.target_audience.trim().is_empty() {
        return Err(ConvertError::MissingFields);
    }

    let audience: Audience = request
        .target_audience
        .parse()
        .map_err(|_| ConvertError::InvalidAudience)?;

    let user_prompt = prompts::build_user_prompt(audience, &request.text);

    match state.gateway.complete(SYSTEM_PROMPT, &user_prompt).await {
        Ok(converted_text) => Ok(Json(ConvertResponse { converted_text })),
        Err(e) => {
            tracing::error!(error = %e, "chat completion call failed");
            Err(ConvertError::Gateway)
        }
    }
}

/// Current server time, local zone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub current_time: String,
}

#[debug_handler]
pub async fn current_time() -> Json<TimeResponse> {
    let now = Local::now();
    Json(TimeResponse {
        current_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
