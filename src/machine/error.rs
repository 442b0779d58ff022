//! Errors surfaced by the strict execution path.

use thiserror::Error;

/// Errors that can occur when a caller asks for a transition to be enforced.
///
/// The lenient [`execute`](super::StateMachine::execute) never produces these;
/// only [`try_execute`](super::StateMachine::try_execute) reports them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No transition registered for action '{action}' from state '{from}'")]
    NoTransition { from: String, action: String },
}
