use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user chose to do with a validated suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDecision {
    Execute,
    Retry,
    Skip,
    Exit,
}

/// Which keys are recognized and where the rest go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionPolicy {
    /// `r` asks for a new suggestion; otherwise it is an unrecognized key
    pub allow_retry: bool,
    /// Produced by `s` and `q`
    pub dismiss: UserDecision,
    /// Produced by every unrecognized key
    pub fallback: UserDecision,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        DecisionPolicy {
            allow_retry: true,
            dismiss: UserDecision::Skip,
            fallback: UserDecision::Skip,
        }
    }
}

/// Map a keypress to a decision
///
/// Pure and deterministic: the same key under the same policy always yields
/// the same decision. Ctrl+C always exits because raw mode swallows SIGINT.
pub fn decide(key: &KeyEvent, policy: &DecisionPolicy) -> UserDecision {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    if control && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return UserDecision::Exit;
    }
    if control || key.modifiers.contains(KeyModifiers::ALT) {
        return policy.fallback;
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'e' => UserDecision::Execute,
            'r' if policy.allow_retry => UserDecision::Retry,
            's' | 'q' => policy.dismiss,
            _ => policy.fallback,
        },
        _ => policy.fallback,
    }
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod decision_tests;
