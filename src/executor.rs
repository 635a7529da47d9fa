//! Script execution
//!
//! Writes the script to a uniquely named transient file and runs it with the
//! user's shell interpreter, inheriting stdin, stdout, stderr and the
//! environment. The transient file is removed on every path out of `run`,
//! including a Ctrl+C aimed at the script.

mod interrupt;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

const SCRIPT_PREFIX: &str = "shell-assist-";
const SCRIPT_SUFFIX: &str = ".sh";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("unable to create script file: {0}")]
    Create(String),

    #[error("unable to write script file: {0}")]
    Write(String),

    #[error("unable to start {interpreter}: {message}")]
    Spawn { interpreter: String, message: String },

    #[error("script exited with status {code}")]
    NonZeroExit { code: i32 },

    #[error("script terminated by signal {signal}")]
    Signal { signal: i32 },

    #[error("unable to remove script file: {0}")]
    Cleanup(String),
}

/// Runs a script body to completion
pub trait ScriptRunner {
    fn run(&self, script: &str) -> Result<(), ExecutionError>;
}

/// Runs scripts through a shell interpreter via a transient file
#[derive(Debug, Clone)]
pub struct ScriptExecutor {
    interpreter: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl ScriptExecutor {
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            temp_dir: None,
        }
    }

    /// Place transient files in `dir` instead of the system temp dir
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    fn create_file(&self) -> Result<NamedTempFile, ExecutionError> {
        let mut builder = Builder::new();
        builder.prefix(SCRIPT_PREFIX).suffix(SCRIPT_SUFFIX);

        match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| ExecutionError::Create(e.to_string()))
    }
}

impl ScriptRunner for ScriptExecutor {
    fn run(&self, script: &str) -> Result<(), ExecutionError> {
        let mut file = self.create_file()?;
        file.write_all(script.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| ExecutionError::Write(e.to_string()))?;

        // Close our handle; the path guard still owns deletion
        let script_path = file.into_temp_path();
        log::debug!(
            "Running {} {}",
            self.interpreter.display(),
            script_path.display()
        );

        let status = {
            let _interrupts = interrupt::defer_to_child();
            Command::new(&self.interpreter).arg(&script_path).status()
        };
        let cleanup = script_path
            .close()
            .map_err(|e| ExecutionError::Cleanup(e.to_string()));

        let status = status.map_err(|e| ExecutionError::Spawn {
            interpreter: self.interpreter.display().to_string(),
            message: e.to_string(),
        })?;
        cleanup?;

        check_status(status)
    }
}

fn check_status(status: ExitStatus) -> Result<(), ExecutionError> {
    if status.success() {
        return Ok(());
    }
    if let Some(code) = status.code() {
        return Err(ExecutionError::NonZeroExit { code });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(ExecutionError::Signal { signal });
        }
    }

    Err(ExecutionError::NonZeroExit { code: -1 })
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;
