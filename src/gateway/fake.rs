//! Fake gateway for tests
//!
//! Answers from canned data and counts invocations so tests can assert the
//! gateway was (or was not) reached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateway::{ChatGateway, GatewayError};

/// Test double returning a fixed response or a forced failure.
#[derive(Debug, Default)]
pub struct FakeGateway {
    response: String,
    error_message: Option<String>,
    calls: AtomicUsize,
    last_system_prompt: Mutex<Option<String>>,
    last_user_prompt: Mutex<Option<String>>,
}

impl FakeGateway {
    /// Fake that succeeds with the given converted text.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            ..Default::default()
        }
    }

    /// Fake that fails every call with a network error.
    pub fn with_error(msg: &str) -> Self {
        Self {
            error_message: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Number of `complete` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// System prompt of the most recent invocation.
    pub fn last_system_prompt(&self) -> Option<String> {
        self.last_system_prompt.lock().unwrap().clone()
    }

    /// User prompt of the most recent invocation.
    pub fn last_user_prompt(&self) -> Option<String> {
        self.last_user_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_system_prompt.lock().unwrap() = Some(system_prompt.to_string());
        *self.last_user_prompt.lock().unwrap() = Some(user_prompt.to_string());

        if let Some(ref msg) = self.error_message {
            return Err(GatewayError::Network(msg.clone()));
        }
        Ok(self.response.clone())
    }
}
