//! User interaction: presenting a suggestion and turning one keypress into a decision

mod decision;
mod keypress;
mod prompt_input;
mod render;
mod state;

use thiserror::Error;

pub use decision::{DecisionPolicy, UserDecision, decide};
pub use keypress::{KeySource, TerminalKeys};
pub use prompt_input::{PromptSource, StdinPrompt};
pub use render::{Palette, present_choices, present_suggestion, write_prompt_marker};
pub use state::InteractionState;

/// Terminal input failures; each aborts the current cycle without executing anything
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unable to switch terminal mode: {0}")]
    RawMode(String),

    #[error("unable to read key: {0}")]
    Read(String),

    #[error("unable to read prompt: {0}")]
    Prompt(String),

    #[error("unable to write to terminal: {0}")]
    Output(String),

    #[error("end of input")]
    EndOfInput,
}
