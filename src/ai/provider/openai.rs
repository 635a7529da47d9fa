//! OpenAI-compatible chat completion client
//!
//! Sends one non-streaming `/chat/completions` request per suggestion. The
//! request runs on a private current-thread runtime so callers stay
//! synchronous, while cancellation and the progress spinner are polled
//! cooperatively alongside it.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use super::{AiError, CompletionClient, CompletionRequest};
use crate::ai::spinner::Spinner;
use crate::config::ConfigError;

/// Default OpenAI API endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Path appended to custom base URLs
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// OpenAI-compatible chat completion client
pub struct OpenAiClient {
    api_key: String,
    model: String,
    url: String,
    timeout_secs: u64,
    http: reqwest::Client,
    runtime: Runtime,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("url", &self.url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// `base_url` may point at any OpenAI-compatible server; `/chat/completions`
    /// is appended unless already present.
    pub fn new(
        api_key: String,
        model: String,
        base_url: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            api_key,
            model,
            url: build_url(base_url.as_deref()),
            timeout_secs,
            http,
            runtime,
        })
    }

    /// Full endpoint URL requests are sent to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Serialize the request body for a completion
    pub fn build_request_body(&self, request: &CompletionRequest) -> String {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": request.system
                },
                {
                    "role": "user",
                    "content": request.user
                }
            ]
        })
        .to_string()
    }

    async fn send(&self, body: String) -> Result<String, AiError> {
        let response = self
            .http
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(AiError::Api {
                code: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        extract_content(&text)
    }

    fn transport_error(&self, err: reqwest::Error) -> AiError {
        if err.is_timeout() {
            AiError::Timeout(self.timeout_secs)
        } else {
            AiError::Network(err.to_string())
        }
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(
        &self,
        request: &CompletionRequest,
        cancel_token: &CancellationToken,
    ) -> Result<String, AiError> {
        if cancel_token.is_cancelled() {
            return Err(AiError::Cancelled);
        }

        let body = self.build_request_body(request);
        log::debug!("Sending completion request to {} ({})", self.url, self.model);

        self.runtime.block_on(async {
            let send = self.send(body);
            tokio::pin!(send);

            let mut spinner = Spinner::for_stderr();
            let mut ticker = tokio::time::interval(SPINNER_INTERVAL);

            let result = loop {
                tokio::select! {
                    biased;
                    _ = cancel_token.cancelled() => break Err(AiError::Cancelled),
                    result = &mut send => break result,
                    _ = ticker.tick() => spinner.tick(),
                }
            };

            spinner.clear();
            result
        })
    }
}

/// Build the endpoint URL from an optional base URL
fn build_url(base_url: Option<&str>) -> String {
    match base_url.map(str::trim).filter(|u| !u.is_empty()) {
        None => OPENAI_API_URL.to_string(),
        Some(base) => {
            let base = base.trim_end_matches('/');
            if base.ends_with(CHAT_COMPLETIONS_PATH) {
                base.to_string()
            } else {
                format!("{}{}", base, CHAT_COMPLETIONS_PATH)
            }
        }
    }
}

/// Pull the first choice's content out of a response body
fn extract_content(body: &str) -> Result<String, AiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

    let choice = response.choices.into_iter().next().ok_or(AiError::NoChoices)?;
    Ok(choice.message.content.unwrap_or_default())
}

/// Prefer `error.message` from an error body, falling back to the first line
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.lines().next().unwrap_or("Unknown error").trim().to_string())
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
