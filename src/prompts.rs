//! Prompt catalog
//!
//! Fixed instruction strings for the tone-conversion LLM call. One generic
//! expert persona is sent as the system message; the per-audience
//! instruction is prepended to the user text.

use std::fmt;
use std::str::FromStr;

/// Persona instruction sent as the `system` message on every request.
pub const SYSTEM_PROMPT: &str = "당신은 업무 말투 변환 전문가입니다. 사용자의 요청에 따라 주어진 텍스트를 적절한 업무 어투로 변환합니다. 변환된 텍스트만 출력하며, 추가적인 설명은 포함하지 않습니다.";

const BOSS_INSTRUCTION: &str =
    "다음 문장을 상사에게 적합한 존댓말과 경어를 사용하여 변환해주세요: ";
const COLLEAGUE_INSTRUCTION: &str =
    "다음 문장을 타팀 동료에게 적합한 중립적이지만 예의바른 업무 말투로 변환해주세요: ";
const CLIENT_INSTRUCTION: &str =
    "다음 문장을 고객에게 적합한 공식적이고 정중한 비즈니스 어투로 변환해주세요: ";

/// Relationship-based tone target for the conversion.
///
/// Parsing is strict: anything outside the three known identifiers is an
/// error, surfaced to the client as a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Superior within the same organization.
    Boss,
    /// Peer on another team.
    Colleague,
    /// External customer.
    Client,
}

/// Unknown audience identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAudience(pub String);

impl fmt::Display for UnknownAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown target audience: {}", self.0)
    }
}

impl std::error::Error for UnknownAudience {}

impl FromStr for Audience {
    type Err = UnknownAudience;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boss" => Ok(Audience::Boss),
            "colleague" => Ok(Audience::Colleague),
            "client" => Ok(Audience::Client),
            other => Err(UnknownAudience(other.to_string())),
        }
    }
}

impl Audience {
    /// Instruction template for this audience. Total over the enum.
    pub fn instruction(&self) -> &'static str {
        match self {
            Audience::Boss => BOSS_INSTRUCTION,
            Audience::Colleague => COLLEAGUE_INSTRUCTION,
            Audience::Client => CLIENT_INSTRUCTION,
        }
    }
}

/// Build the `user` message: audience instruction followed by the raw text.
pub fn build_user_prompt(audience: Audience, text: &str) -> String {
    let mut prompt = String::with_capacity(audience.instruction().len() + text.len());
    prompt.push_str(audience.instruction());
    prompt.push_str(text);
    prompt
}
