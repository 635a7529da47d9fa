use thiserror::Error;

use crate::ai::provider::AiError;
use crate::ai::suggestion::ParseError;
use crate::config::ConfigError;
use crate::executor::ExecutionError;
use crate::interaction::InputError;
use crate::validator::ValidationError;

/// Marker printed in front of every user-visible error line
pub const ERROR_MARKER: &str = "🚨 OOPS";

/// Errors surfaced by one suggestion cycle
#[derive(Debug, Error)]
pub enum ShellAssistError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("completion: {0}")]
    Transport(#[from] AiError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("input is empty")]
    EmptyPrompt,

    #[error("required command `{name}` was not found in PATH")]
    MissingExecutable { name: String },

    #[error("input: {0}")]
    Input(#[from] InputError),

    #[error("command: {0}")]
    Execution(#[from] ExecutionError),
}

impl ShellAssistError {
    /// Only configuration problems stop the program; everything else restarts the cycle
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellAssistError::Config(_))
    }

    /// Single line shown to the user
    pub fn report_line(&self) -> String {
        format!("{}: {}", ERROR_MARKER, self)
    }
}

impl From<ValidationError> for ShellAssistError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingExecutable { name } => {
                ShellAssistError::MissingExecutable { name }
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
