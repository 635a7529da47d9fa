//! Process environment discovery
//!
//! The API key and shell come from environment variables, the OS from the
//! build target, and the interpreter path from a PATH lookup.

use std::path::{Path, PathBuf};

use super::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const SHELL_VAR: &str = "SHELL";

/// Everything the assistant needs from the surrounding process
#[derive(Clone, PartialEq, Eq)]
pub struct Environment {
    pub api_key: String,
    /// Short shell name used in the prompt, e.g. `bash`
    pub shell_name: String,
    /// Absolute path of the interpreter that runs the scripts
    pub shell_interpreter: PathBuf,
    pub operating_system: String,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("shell_name", &self.shell_name)
            .field("shell_interpreter", &self.shell_interpreter)
            .field("operating_system", &self.operating_system)
            .finish_non_exhaustive()
    }
}

impl Environment {
    /// Discover the environment of the current process
    pub fn discover() -> Result<Self, ConfigError> {
        Self::from_lookup(
            |name| std::env::var(name).ok(),
            std::env::consts::OS,
            |shell| which::which(shell).ok(),
        )
    }

    /// Build the environment from explicit lookups
    ///
    /// Checks run in a fixed order (API key, OS, shell, interpreter) and the
    /// first failure is returned.
    pub fn from_lookup(
        var: impl Fn(&str) -> Option<String>,
        operating_system: &str,
        resolve: impl Fn(&str) -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_key = var(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if operating_system.trim().is_empty() {
            return Err(ConfigError::UnknownOs);
        }

        let shell = var(SHELL_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingShell)?;

        let shell_interpreter = resolve(&shell).ok_or_else(|| ConfigError::InterpreterNotFound {
            shell: shell.clone(),
        })?;

        Ok(Environment {
            api_key,
            shell_name: shell_short_name(&shell),
            shell_interpreter,
            operating_system: operating_system.to_string(),
        })
    }
}

/// `/usr/bin/zsh` becomes `zsh`; bare names are kept as-is
fn shell_short_name(shell: &str) -> String {
    Path::new(shell)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(shell)
        .to_string()
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod environment_tests;
