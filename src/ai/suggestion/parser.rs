//! Suggestion parsing for model replies
//!
//! Two reply conventions are understood. The markers convention looks like:
//! ```text
//! Sure! Here is what you asked for.
//! [SCRIPT]
//! ls -la
//! [/SCRIPT]
//! [EXPLANATION]
//! Lists files, including hidden ones
//! [/EXPLANATION]
//! [EXECUTABLES]
//! ls
//! [/EXECUTABLES]
//! ```
//!
//! The JSON convention is a single object:
//! ```text
//! {"command": "ls -la", "executables": ["ls"], "explain": "Lists files"}
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::{Convention, Suggestion};

/// First complete `[SCRIPT]`, `[EXPLANATION]`, `[EXECUTABLES]` sequence, newlines included
static SECTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\[SCRIPT\](.*?)\[/SCRIPT\].*?\[EXPLANATION\](.*?)\[/EXPLANATION\].*?\[EXECUTABLES\](.*?)\[/EXECUTABLES\]",
    )
    .expect("section pattern is valid")
});

/// Errors produced while turning a reply into a [`Suggestion`]
///
/// Every variant keeps the raw reply for diagnostics. The display text stays
/// on one line so it can be reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("reply is missing the [SCRIPT], [EXPLANATION] or [EXECUTABLES] section")]
    MarkersNotFound { raw: String },

    #[error("reply is not a valid suggestion record: {reason}")]
    InvalidRecord { raw: String, reason: String },

    #[error("reply contained an empty script")]
    EmptyScript { raw: String },
}

impl ParseError {
    /// The reply text that failed to parse
    pub fn raw(&self) -> &str {
        match self {
            ParseError::MarkersNotFound { raw }
            | ParseError::InvalidRecord { raw, .. }
            | ParseError::EmptyScript { raw } => raw,
        }
    }
}

/// Wire shape of the JSON convention
#[derive(Deserialize)]
struct EncodedReply {
    command: String,
    executables: Vec<String>,
    explain: String,
}

/// Parse a model reply according to the configured convention
///
/// Never returns a partially populated suggestion: either all three parts
/// are recovered and the script is non-empty, or an error is returned.
pub fn parse_suggestion(raw: &str, convention: Convention) -> Result<Suggestion, ParseError> {
    let suggestion = match convention {
        Convention::Markers => parse_markers(raw)?,
        Convention::Json => parse_encoded(raw)?,
    };

    if suggestion.script.trim().is_empty() {
        return Err(ParseError::EmptyScript {
            raw: raw.to_string(),
        });
    }

    Ok(suggestion)
}

fn parse_markers(raw: &str) -> Result<Suggestion, ParseError> {
    let not_found = || ParseError::MarkersNotFound {
        raw: raw.to_string(),
    };

    let captures = SECTIONS.captures(raw).ok_or_else(not_found)?;
    let section = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str().trim())
            .ok_or_else(not_found)
    };

    let script = section(1)?;
    let explanation = section(2)?;
    let executables = split_executables(section(3)?);

    Ok(Suggestion {
        script: script.to_string(),
        explanation: explanation.to_string(),
        executables,
    })
}

fn parse_encoded(raw: &str) -> Result<Suggestion, ParseError> {
    let reply: EncodedReply =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidRecord {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;

    Ok(Suggestion {
        script: reply.command,
        explanation: reply.explain,
        executables: reply.executables,
    })
}

/// Split the executables section on commas
///
/// A blank section means no executables. Otherwise every token is kept in
/// place, even an empty one, so `ls,,grep` yields three entries.
fn split_executables(section: &str) -> Vec<String> {
    if section.trim().is_empty() {
        return Vec::new();
    }

    section
        .split(',')
        .map(|token| token.trim().to_string())
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
