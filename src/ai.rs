//! Model-facing side of the assistant
//!
//! Prompt composition, the completion client, and reply parsing.

pub mod prompt;
pub mod provider;
pub mod suggestion;

mod spinner;

pub use prompt::build_system_prompt;
pub use provider::{AiError, CompletionClient, CompletionRequest, OpenAiClient};
pub use suggestion::{Convention, ParseError, Suggestion, parse_suggestion};
