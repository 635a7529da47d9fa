//! AI provider abstraction
//!
//! Defines the CompletionClient trait, the request shape, AiError types, and
//! the factory for creating the configured client.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{AiConfig, ConfigError};

mod openai;

pub use openai::OpenAiClient;

/// Errors that can occur while talking to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response decoded but carried no choices
    #[error("no choices returned")]
    NoChoices,

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// A two-message chat exchange: system instruction plus the user's prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

/// Something that can turn a [`CompletionRequest`] into reply text
///
/// Implementations block until the reply arrives, the token is cancelled,
/// or their own timeout fires.
pub trait CompletionClient {
    fn complete(
        &self,
        request: &CompletionRequest,
        cancel_token: &CancellationToken,
    ) -> Result<String, AiError>;
}

/// Create the completion client for a configuration and API key
pub fn from_config(config: &AiConfig, api_key: &str) -> Result<OpenAiClient, ConfigError> {
    if config.model.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Missing or empty model in [ai] config".to_string(),
        ));
    }

    OpenAiClient::new(
        api_key.to_string(),
        config.model.clone(),
        config.base_url.clone(),
        config.timeout_secs,
    )
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
