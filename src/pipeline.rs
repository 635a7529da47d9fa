//! Suggestion pipeline
//!
//! Runs one cycle at a time: obtain a prompt, request a completion, parse
//! it, validate the executables, ask the user, and execute on request.
//! Every collaborator sits behind a trait so the whole flow can be driven
//! without a network, a terminal or a shell.

use std::io::{self, Write};

use tokio_util::sync::CancellationToken;

use crate::ai::{CompletionClient, CompletionRequest, Convention, parse_suggestion};
use crate::error::ShellAssistError;
use crate::executor::ScriptRunner;
use crate::interaction::{
    DecisionPolicy, InputError, InteractionState, KeySource, Palette, PromptSource, UserDecision,
    decide, present_choices, present_suggestion,
};
use crate::validator::{CommandResolver, ExecutableValidator};

/// How a completed cycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The script ran and exited successfully
    Executed,
    /// The user wants a new suggestion for the same prompt
    Retry { prompt: String },
    Skipped,
    Exit,
}

/// Per-deployment settings for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub convention: Convention,
    pub policy: DecisionPolicy,
    pub palette: Palette,
    /// Fully composed system instruction
    pub system_prompt: String,
}

/// Collaborators the pipeline drives
pub struct Collaborators {
    pub client: Box<dyn CompletionClient>,
    pub resolver: Box<dyn CommandResolver>,
    pub prompts: Box<dyn PromptSource>,
    pub keys: Box<dyn KeySource>,
    pub runner: Box<dyn ScriptRunner>,
}

pub struct SuggestionPipeline {
    settings: PipelineSettings,
    client: Box<dyn CompletionClient>,
    validator: ExecutableValidator<Box<dyn CommandResolver>>,
    prompts: Box<dyn PromptSource>,
    keys: Box<dyn KeySource>,
    runner: Box<dyn ScriptRunner>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    cancel_token: CancellationToken,
    state: InteractionState,
}

impl SuggestionPipeline {
    pub fn new(settings: PipelineSettings, parts: Collaborators) -> Self {
        Self {
            settings,
            client: parts.client,
            validator: ExecutableValidator::new(parts.resolver),
            prompts: parts.prompts,
            keys: parts.keys,
            runner: parts.runner,
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            cancel_token: CancellationToken::new(),
            state: InteractionState::default(),
        }
    }

    /// Redirect presentation and error reports
    pub fn with_output(mut self, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        self.out = out;
        self.err = err;
        self
    }

    /// Cancelling this token aborts the in-flight and all later completion requests
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }

    /// State reached by the most recent cycle
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Keep cycling until the user exits or input ends
    ///
    /// The initial prompt is used for the first cycle only. A retry repeats
    /// the same prompt; anything else, including a reported error, moves on
    /// to a fresh prompt. Only fatal errors are returned.
    pub fn run(&mut self, initial_prompt: &str) -> Result<(), ShellAssistError> {
        let mut prompt = initial_prompt.trim().to_string();

        loop {
            match self.run_cycle(&prompt) {
                Ok(CycleOutcome::Exit) => return Ok(()),
                Ok(CycleOutcome::Retry { prompt: same }) => prompt = same,
                Ok(CycleOutcome::Executed | CycleOutcome::Skipped) => prompt.clear(),
                Err(ShellAssistError::Input(InputError::EndOfInput)) => {
                    log::debug!("Input closed, leaving");
                    return Ok(());
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    self.report(&e);
                    prompt.clear();
                }
            }
        }
    }

    /// Run one full cycle for `prompt`, asking for one first if it is blank
    pub fn run_cycle(&mut self, prompt: &str) -> Result<CycleOutcome, ShellAssistError> {
        self.state = InteractionState::AwaitingSuggestion;

        let prompt = self.resolve_prompt(prompt)?;
        let request = CompletionRequest {
            system: self.settings.system_prompt.clone(),
            user: prompt.clone(),
        };
        let reply = self
            .client
            .complete(&request, &self.cancel_token.child_token())?;

        self.advance(InteractionState::Validating);
        let convention = self.settings.convention;
        let suggestion = parse_suggestion(&reply, convention).inspect_err(|e| {
            log::debug!("Unparseable {} reply: {:?}", convention.label(), e.raw())
        })?;
        present_suggestion(&mut self.out, &self.settings.palette, &suggestion)
            .map_err(output_error)?;
        self.validator.validate(&suggestion.executables)?;

        self.advance(InteractionState::AwaitingDecision);
        present_choices(&mut self.out, &self.settings.palette, &self.settings.policy)
            .map_err(output_error)?;
        let key = self.keys.read_key()?;
        write!(self.out, "\n\n").map_err(output_error)?;

        let decision = decide(&key, &self.settings.policy);
        log::debug!("Key {:?} mapped to {:?}", key.code, decision);
        self.advance(InteractionState::for_decision(decision));

        match decision {
            UserDecision::Execute => {
                self.runner.run(&suggestion.script)?;
                Ok(CycleOutcome::Executed)
            }
            UserDecision::Retry => Ok(CycleOutcome::Retry { prompt }),
            UserDecision::Skip => Ok(CycleOutcome::Skipped),
            UserDecision::Exit => Ok(CycleOutcome::Exit),
        }
    }

    /// Use the given prompt, or ask for one; never hand a blank prompt onwards
    fn resolve_prompt(&mut self, prompt: &str) -> Result<String, ShellAssistError> {
        let prompt = prompt.trim();
        let prompt = if prompt.is_empty() {
            self.prompts.read_prompt()?
        } else {
            prompt.to_string()
        };

        if prompt.trim().is_empty() {
            return Err(ShellAssistError::EmptyPrompt);
        }
        Ok(prompt)
    }

    fn advance(&mut self, next: InteractionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {:?} -> {:?}",
            self.state,
            next
        );
        log::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn report(&mut self, error: &ShellAssistError) {
        log::debug!("Cycle failed: {:?}", error);
        let _ = writeln!(self.err, "{}", error.report_line());
        let _ = self.err.flush();
    }
}

fn output_error(err: io::Error) -> ShellAssistError {
    ShellAssistError::Input(InputError::Output(err.to_string()))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
