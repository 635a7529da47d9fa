use super::UserDecision;

/// Where one suggestion cycle currently stands
///
/// Every cycle starts fresh at `AwaitingSuggestion`; nothing carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    AwaitingSuggestion,
    Validating,
    AwaitingDecision,
    Executing,
    Retrying,
    Skipping,
    Exiting,
}

impl InteractionState {
    pub fn can_transition_to(self, next: InteractionState) -> bool {
        use InteractionState::*;

        matches!(
            (self, next),
            (AwaitingSuggestion, Validating)
                | (Validating, AwaitingDecision)
                | (AwaitingDecision, Executing | Retrying | Skipping | Exiting)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InteractionState::Executing
                | InteractionState::Retrying
                | InteractionState::Skipping
                | InteractionState::Exiting
        )
    }

    /// State entered once the user has decided
    pub fn for_decision(decision: UserDecision) -> Self {
        match decision {
            UserDecision::Execute => InteractionState::Executing,
            UserDecision::Retry => InteractionState::Retrying,
            UserDecision::Skip => InteractionState::Skipping,
            UserDecision::Exit => InteractionState::Exiting,
        }
    }
}
