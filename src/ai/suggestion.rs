//! Suggestion module for the shell assistant
//!
//! This module provides the suggestion record, the reply conventions the
//! model can be asked to follow, and the parsing logic for both.

pub mod parser;

use serde::Deserialize;

// Re-export main types
pub use parser::{ParseError, parse_suggestion};

/// Textual contract the model is asked to follow in its reply
///
/// One convention is chosen per deployment; replies are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `[SCRIPT]`, `[EXPLANATION]` and `[EXECUTABLES]` sections in free text
    #[default]
    Markers,
    /// A single JSON object with `command`, `executables` and `explain`
    Json,
}

impl Convention {
    /// Whether the user may ask for a revised suggestion under this convention
    pub fn supports_retry(&self) -> bool {
        match self {
            Convention::Markers => true,
            Convention::Json => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Convention::Markers => "markers",
            Convention::Json => "json",
        }
    }
}

/// A script suggestion recovered from a model reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Interpreter-ready script body, never empty
    pub script: String,
    /// Short human-readable summary of what the script does
    pub explanation: String,
    /// Commands the script relies on, in the order the model listed them
    pub executables: Vec<String>,
}
