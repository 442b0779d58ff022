//! The transition table: every legal edge of the state graph.

use super::state::{Action, State};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Directed, labeled edges keyed by `(from, action)`.
///
/// Stored as a two-level map `S → (A → S)`. Each `(from, action)` pair has at
/// most one destination: inserting the same pair again replaces the previous
/// destination. Edges are never removed.
///
/// # Example
///
/// ```rust
/// use statetable::core::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.insert("open", "Closed", "Open");
/// table.insert("close", "Open", "Closed");
///
/// assert_eq!(table.destination(&"Closed", "open"), Some(&"Open"));
/// assert_eq!(table.destination(&"Open", "open"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "S: serde::Serialize, A: serde::Serialize",
            deserialize = "S: serde::Deserialize<'de> + Eq + Hash, \
                           A: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct TransitionTable<S, A> {
    edges: HashMap<S, HashMap<A, S>>,
}

impl<S: State, A: Action> PartialEq for TransitionTable<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<S: State, A: Action> Eq for TransitionTable<S, A> {}

impl<S: State, A: Action> Default for TransitionTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> TransitionTable<S, A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Insert the edge `(from, action) → to`.
    ///
    /// Returns the destination this edge replaced, if the pair was already
    /// registered. Self-loops (`from == to`) are accepted.
    pub fn insert(&mut self, action: A, from: S, to: S) -> Option<S> {
        self.edges.entry(from).or_default().insert(action, to)
    }

    /// Look up the destination registered for `(from, action)`.
    pub fn destination<Q>(&self, from: &S, action: &Q) -> Option<&S>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges.get(from)?.get(action)
    }

    /// Check whether an edge exists for `(from, action)`.
    pub fn contains<Q>(&self, from: &S, action: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.destination(from, action).is_some()
    }

    /// Actions registered out of `state`, in no particular order.
    pub fn actions_from<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a A> + 'a {
        self.edges.get(state).into_iter().flat_map(HashMap::keys)
    }

    /// Total number of edges.
    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    /// True when no edge has been registered.
    pub fn is_empty(&self) -> bool {
        self.edges.values().all(HashMap::is_empty)
    }
}
