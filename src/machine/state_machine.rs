//! Table-driven state machine with a post-transition hook.

use crate::core::{Action, State, TransitionTable};
use crate::machine::error::TransitionError;
use crate::machine::step::StepResult;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// A single live state plus the table of edges it may follow.
///
/// The current state changes only through [`execute`](Self::execute) and its
/// variants, and only along an edge registered with
/// [`add_action`](Self::add_action). Executing an action with no matching
/// edge, or one whose edge loops back to the current state, leaves the
/// machine untouched and skips the completion hook.
///
/// # Example
///
/// ```rust
/// use statetable::StateMachine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Player {
///     Idle,
///     Jumping,
/// }
///
/// let mut machine = StateMachine::new(Player::Idle);
/// machine.add_action("IdleToJump", Player::Idle, Player::Jumping);
///
/// assert!(machine.can_execute("IdleToJump"));
///
/// let mut seen = None;
/// machine.execute_with("IdleToJump", |old, new| seen = Some((old.clone(), new.clone())));
///
/// assert_eq!(machine.current_state(), &Player::Jumping);
/// assert_eq!(seen, Some((Player::Idle, Player::Jumping)));
/// assert!(!machine.can_execute("IdleToJump"));
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S, A> {
    current: S,
    table: TransitionTable<S, A>,
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a machine sitting in `initial` with no registered edges.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            table: TransitionTable::new(),
        }
    }

    /// Register the edge `(from, action) → to`.
    ///
    /// Registering the same `(from, action)` pair again silently replaces the
    /// destination. The current state is never touched, even when `from` is
    /// the current state.
    pub fn add_action(&mut self, action: A, from: S, to: S) {
        trace!(?action, ?from, ?to, "registering transition");
        if let Some(previous) = self.table.insert(action, from, to) {
            debug!(replaced = ?previous, "transition destination overwritten");
        }
    }

    /// Check whether `action` has an edge out of the current state.
    pub fn can_execute<Q>(&self, action: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains(&self.current, action)
    }

    /// Follow the edge for `action`, if there is one.
    ///
    /// Safe to call unconditionally: a missing edge or a self-loop is a no-op.
    pub fn execute<Q>(&mut self, action: &Q)
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.step(action);
    }

    /// Follow the edge for `action` and notify `completion` with
    /// `(previous, new)` once the state has changed.
    ///
    /// `completion` is not called when the state stays the same.
    pub fn execute_with<Q, F>(&mut self, action: &Q, completion: F)
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        F: FnOnce(&S, &S),
    {
        if let StepResult::Transitioned { from, to } = self.step(action) {
            completion(&from, &to);
        }
    }

    /// Follow the edge for `action` and report which branch was taken.
    pub fn step<Q>(&mut self, action: &Q) -> StepResult<S>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(next) = self.table.destination(&self.current, action) else {
            trace!(state = ?self.current, ?action, "no transition registered, ignoring");
            return StepResult::NoTransition;
        };

        if *next == self.current {
            trace!(state = ?self.current, ?action, "self-loop, state unchanged");
            return StepResult::Unchanged;
        }

        let to = next.clone();
        let from = std::mem::replace(&mut self.current, to.clone());
        debug!(?from, ?to, ?action, "state transition");

        StepResult::Transitioned { from, to }
    }

    /// Like [`execute`](Self::execute), but reports a missing edge as an error.
    ///
    /// A self-loop is not an error; the unchanged state is returned.
    pub fn try_execute<Q>(&mut self, action: &Q) -> Result<&S, TransitionError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.step(action) {
            StepResult::NoTransition => Err(TransitionError::NoTransition {
                from: format!("{:?}", self.current),
                action: format!("{action:?}"),
            }),
            StepResult::Transitioned { .. } | StepResult::Unchanged => Ok(&self.current),
        }
    }

    /// Get current state
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Actions that have an edge out of the current state.
    pub fn available_actions(&self) -> impl Iterator<Item = &A> + '_ {
        self.table.actions_from(&self.current)
    }

    /// Read-only view of every registered edge.
    pub fn transitions(&self) -> &TransitionTable<S, A> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Phase {
        Start,
        Running,
        Done,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Trigger {
        Begin,
        Finish,
        Reset,
    }

    fn workflow() -> StateMachine<Phase, Trigger> {
        let mut machine = StateMachine::new(Phase::Start);
        machine.add_action(Trigger::Begin, Phase::Start, Phase::Running);
        machine.add_action(Trigger::Finish, Phase::Running, Phase::Done);
        machine
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine: StateMachine<Phase, Trigger> = StateMachine::new(Phase::Running);

        assert_eq!(machine.current_state(), &Phase::Running);
        assert!(machine.transitions().is_empty());
        assert!(!machine.can_execute(&Trigger::Begin));
        assert!(!machine.can_execute(&Trigger::Finish));
    }

    #[test]
    fn add_action_does_not_move_current_state() {
        let mut machine = StateMachine::new(Phase::Start);
        machine.add_action(Trigger::Reset, Phase::Start, Phase::Done);

        assert_eq!(machine.current_state(), &Phase::Start);
    }

    #[test]
    fn reregistration_overwrites_destination() {
        let mut machine = StateMachine::new(Phase::Start);
        machine.add_action(Trigger::Begin, Phase::Start, Phase::Running);
        machine.add_action(Trigger::Begin, Phase::Start, Phase::Done);

        assert_eq!(machine.transitions().len(), 1);

        machine.execute(&Trigger::Begin);
        assert_eq!(machine.current_state(), &Phase::Done);
    }

    #[test]
    fn can_execute_tracks_current_state() {
        let mut machine = workflow();

        assert!(machine.can_execute(&Trigger::Begin));
        assert!(!machine.can_execute(&Trigger::Finish));

        machine.execute(&Trigger::Begin);

        assert!(!machine.can_execute(&Trigger::Begin));
        assert!(machine.can_execute(&Trigger::Finish));
    }

    #[test]
    fn missing_edge_is_a_silent_noop() {
        let mut machine = workflow();
        let calls = RefCell::new(0);

        machine.execute_with(&Trigger::Finish, |_, _| *calls.borrow_mut() += 1);

        assert_eq!(machine.current_state(), &Phase::Start);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn self_loop_skips_completion() {
        let mut machine = StateMachine::new(Phase::Running);
        machine.add_action(Trigger::Reset, Phase::Running, Phase::Running);
        let mut calls = 0;

        assert!(machine.can_execute(&Trigger::Reset));
        machine.execute_with(&Trigger::Reset, |_, _| calls += 1);

        assert_eq!(machine.current_state(), &Phase::Running);
        assert_eq!(calls, 0);
    }

    #[test]
    fn completion_receives_previous_and_new_state() {
        let mut machine = workflow();
        let mut seen = Vec::new();

        machine.execute_with(&Trigger::Begin, |old, new| {
            seen.push((old.clone(), new.clone()))
        });
        machine.execute_with(&Trigger::Finish, |old, new| {
            seen.push((old.clone(), new.clone()))
        });
        machine.execute_with(&Trigger::Begin, |old, new| {
            seen.push((old.clone(), new.clone()))
        });

        assert_eq!(machine.current_state(), &Phase::Done);
        assert_eq!(
            seen,
            vec![
                (Phase::Start, Phase::Running),
                (Phase::Running, Phase::Done),
            ]
        );
    }

    #[test]
    fn step_reports_branch_taken() {
        let mut machine = workflow();
        machine.add_action(Trigger::Reset, Phase::Running, Phase::Running);

        assert_eq!(machine.step(&Trigger::Finish), StepResult::NoTransition);
        assert_eq!(
            machine.step(&Trigger::Begin),
            StepResult::Transitioned {
                from: Phase::Start,
                to: Phase::Running,
            }
        );
        assert_eq!(machine.step(&Trigger::Reset), StepResult::Unchanged);
        assert!(!machine.step(&Trigger::Reset).is_transitioned());
    }

    #[test]
    fn try_execute_reports_missing_edge() {
        let mut machine = workflow();

        let err = machine.try_execute(&Trigger::Finish).unwrap_err();
        assert_eq!(
            err,
            TransitionError::NoTransition {
                from: "Start".to_string(),
                action: "Finish".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "No transition registered for action 'Finish' from state 'Start'"
        );
        assert_eq!(machine.current_state(), &Phase::Start);
    }

    #[test]
    fn try_execute_accepts_transitions_and_self_loops() {
        let mut machine = workflow();
        machine.add_action(Trigger::Reset, Phase::Running, Phase::Running);

        assert_eq!(machine.try_execute(&Trigger::Begin), Ok(&Phase::Running));
        assert_eq!(machine.try_execute(&Trigger::Reset), Ok(&Phase::Running));
    }

    #[test]
    fn available_actions_follow_current_state() {
        let mut machine = workflow();
        machine.add_action(Trigger::Reset, Phase::Start, Phase::Start);

        let mut actions: Vec<_> = machine.available_actions().cloned().collect();
        actions.sort_by_key(|a| format!("{a:?}"));
        assert_eq!(actions, vec![Trigger::Begin, Trigger::Reset]);

        machine.execute(&Trigger::Begin);
        let actions: Vec<_> = machine.available_actions().collect();
        assert_eq!(actions, vec![&Trigger::Finish]);
    }

    #[test]
    fn string_actions_accept_str_lookups() {
        let mut machine = StateMachine::new("Start");
        machine.add_action("Begin".to_string(), "Start", "Running");

        assert!(machine.can_execute("Begin"));
        machine.execute("Begin");
        assert_eq!(machine.current_state(), &"Running");
    }
}
