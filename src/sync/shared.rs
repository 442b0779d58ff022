//! Lock-guarded handle for machines shared across threads.

use crate::core::{Action, State};
use crate::machine::{StateMachine, StepResult, TransitionError};
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Cloneable handle to a [`StateMachine`] behind a single mutex.
///
/// The one lock guards both the transition table and the current state, so
/// each call observes and mutates them atomically. Completion hooks run after
/// the lock has been released: a hook may call back into the same handle and
/// will see the new current state.
///
/// # Example
///
/// ```rust
/// use statetable::sync::SharedStateMachine;
/// use std::thread;
///
/// let machine = SharedStateMachine::new(0u32);
/// for n in 0..4u32 {
///     machine.add_action("next", n, n + 1);
/// }
///
/// thread::scope(|scope| {
///     for _ in 0..4 {
///         let machine = machine.clone();
///         scope.spawn(move || machine.execute("next"));
///     }
/// });
///
/// assert_eq!(machine.current_state(), 4);
/// ```
pub struct SharedStateMachine<S, A> {
    inner: Arc<Mutex<StateMachine<S, A>>>,
}

impl<S, A> Clone for SharedStateMachine<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action> From<StateMachine<S, A>> for SharedStateMachine<S, A> {
    fn from(machine: StateMachine<S, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }
}

impl<S: State, A: Action> SharedStateMachine<S, A> {
    /// Create a shared machine sitting in `initial` with no registered edges.
    pub fn new(initial: S) -> Self {
        StateMachine::new(initial).into()
    }

    /// Register the edge `(from, action) → to`.
    pub fn add_action(&self, action: A, from: S, to: S) {
        self.inner.lock().add_action(action, from, to);
    }

    /// Check whether `action` has an edge out of the current state.
    ///
    /// The answer may be stale by the time the caller acts on it; use
    /// [`try_execute`](Self::try_execute) to check and move in one step.
    pub fn can_execute<Q>(&self, action: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().can_execute(action)
    }

    /// Follow the edge for `action`, if there is one.
    pub fn execute<Q>(&self, action: &Q)
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.inner.lock().execute(action);
    }

    /// Follow the edge for `action`, then notify `completion` with
    /// `(previous, new)` outside the lock.
    pub fn execute_with<Q, F>(&self, action: &Q, completion: F)
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        F: FnOnce(&S, &S),
    {
        let result = self.inner.lock().step(action);
        if let StepResult::Transitioned { from, to } = result {
            completion(&from, &to);
        }
    }

    /// Follow the edge for `action`, reporting a missing edge as an error.
    pub fn try_execute<Q>(&self, action: &Q) -> Result<S, TransitionError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.inner.lock().try_execute(action).cloned()
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        self.inner.lock().current_state().clone()
    }

    /// Run `f` against the machine while holding the lock.
    ///
    /// `f` must not call back into this handle.
    pub fn with<R>(&self, f: impl FnOnce(&StateMachine<S, A>) -> R) -> R {
        f(&self.inner.lock())
    }
}
