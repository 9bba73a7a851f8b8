//! Runtime configuration
//!
//! Everything is read from the environment once at startup and carried in an
//! explicit struct. The Groq API key is mandatory; the process refuses to
//! start without it.

use std::path::PathBuf;

use tracing::debug;

/// Default Groq endpoint (OpenAI-compatible API surface).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ASSET_ROOT: &str = "frontend";

/// Configuration errors are fatal: they abort startup before the server
/// binds its listener.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY environment variable is not set; check your .env file")]
    MissingApiKey,

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Process-wide configuration, built once in `main` and handed to the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API credential, read from `GROQ_API_KEY`.
    pub api_key: String,
    /// Base URL of the chat-completion API (`GROQ_BASE_URL` override).
    pub base_url: String,
    /// Bind host (`HOST` override).
    pub host: String,
    /// Bind port (`PORT` override).
    pub port: u16,
    /// Directory the static frontend is served from (`ASSET_ROOT` override).
    pub asset_root: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = std::env::var("GROQ_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let asset_root = std::env::var("ASSET_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSET_ROOT));

        debug!(
            host = %host,
            port,
            asset_root = %asset_root.display(),
            "configuration loaded"
        );

        Ok(Self {
            api_key,
            base_url,
            host,
            port,
            asset_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_missing() {
        let raw: Option<String> = Some("   ".to_string());
        let key = raw.filter(|k| !k.trim().is_empty());
        assert!(key.is_none());
    }

    #[test]
    fn config_error_message_names_the_variable() {
        let msg = ConfigError::MissingApiKey.to_string();
        assert!(msg.contains("GROQ_API_KEY"));
    }
}
