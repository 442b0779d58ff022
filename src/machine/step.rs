//! Outcome of a single execution attempt.

/// Which branch an execution took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult<S> {
    /// The machine moved from `from` to `to`.
    Transitioned { from: S, to: S },

    /// An edge exists but points back at the current state.
    Unchanged,

    /// No edge is registered for the action from the current state.
    NoTransition,
}

impl<S> StepResult<S> {
    /// True only when the current state actually changed.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}
