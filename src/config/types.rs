// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::ai::Convention;
use crate::interaction::{DecisionPolicy, UserDecision};

/// Model used when the config file does not name one
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Seconds before a completion request is abandoned
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Decision produced by the dismiss keys and by unrecognized keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DismissDecision {
    #[default]
    Skip,
    Exit,
}

impl From<DismissDecision> for UserDecision {
    fn from(value: DismissDecision) -> Self {
        match value {
            DismissDecision::Skip => UserDecision::Skip,
            DismissDecision::Exit => UserDecision::Exit,
        }
    }
}

/// Completion endpoint section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Reply convention section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    pub convention: Convention,
}

/// Keypress mapping section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Overrides whether `r` asks for a new suggestion; defaults to what the convention supports
    pub allow_retry: Option<bool>,
    pub dismiss: DismissDecision,
    pub fallback: DismissDecision,
}

/// Terminal output section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { color: true }
    }
}

/// Script execution section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Directory for transient script files; the system temp dir when unset
    pub temp_dir: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub reply: ReplyConfig,
    pub keys: KeysConfig,
    pub output: OutputConfig,
    pub executor: ExecutorConfig,
}

impl Config {
    /// Key mapping for the configured convention
    pub fn decision_policy(&self) -> DecisionPolicy {
        DecisionPolicy {
            allow_retry: self
                .keys
                .allow_retry
                .unwrap_or_else(|| self.reply.convention.supports_retry()),
            dismiss: self.keys.dismiss.into(),
            fallback: self.keys.fallback.into(),
        }
    }
}
