//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, State};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Edges are applied in the order they were declared, so a repeated
/// `(from, action)` pair resolves to the last destination given.
pub struct StateMachineBuilder<S, A> {
    initial: Option<S>,
    edges: Vec<(A, S, S)>,
}

impl<S: State, A: Action> StateMachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            edges: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare the edge `(from, action) → to`.
    pub fn action(mut self, action: A, from: S, to: S) -> Self {
        self.edges.push((action, from, to));
        self
    }

    /// Declare several edges at once, as `(action, from, to)` triples.
    pub fn actions<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (A, S, S)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial);
        for (action, from, to) in self.edges {
            machine.add_action(action, from, to);
        }

        Ok(machine)
    }
}

impl<S: State, A: Action> Default for StateMachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
