//! Turn a natural-language request into a shell script, show it, and run it
//! only after the user says so.

pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod interaction;
pub mod pipeline;
pub mod validator;

#[cfg(test)]
mod test_utils;

pub use error::{ERROR_MARKER, ShellAssistError};
pub use pipeline::{Collaborators, CycleOutcome, PipelineSettings, SuggestionPipeline};
