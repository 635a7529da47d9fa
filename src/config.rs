//! Configuration: process environment plus an optional TOML file

mod environment;
mod loader;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use environment::{API_KEY_VAR, Environment, SHELL_VAR};
pub use loader::{config_path, load_config, load_config_from_path};
pub use types::{
    AiConfig, Config, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, DismissDecision, ExecutorConfig,
    KeysConfig, OutputConfig, ReplyConfig,
};

/// Startup problems; any of these stops the program before the first cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "OPENAI_API_KEY is not set. Please set the OPENAI_API_KEY environment variable to your OpenAI API key"
    )]
    MissingApiKey,

    #[error("unable to determine shell: SHELL is not set")]
    MissingShell,

    #[error("unable to determine OS")]
    UnknownOs,

    #[error("unable to find {shell} interpreter")]
    InterpreterNotFound { shell: String },

    #[error("invalid config file {}: {message}", path.display())]
    InvalidFile { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("unable to compose prompt: {0}")]
    Prompt(String),

    #[error("unable to create completion client: {0}")]
    Client(String),
}
