//! Capability traits for state and action values.
//!
//! The machine assigns no meaning to individual states or actions. It only
//! needs to compare them, use them as map keys, and print them in diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so plain
/// enums, integers and strings all work without extra code.
///
/// # Required Traits
///
/// - `Clone`: the previous state is handed to the completion hook after it has
///   been replaced
/// - `Eq` + `Hash`: states are table keys and are compared to detect self-loops
/// - `Debug`: states appear in log fields and error messages
///
/// # Example
///
/// ```rust
/// use statetable::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&Door::Open);
/// assert_state(&"idle");
/// assert_state(&42u8);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for transition triggers.
///
/// Actions are mnemonic labels such as `Open` or `"IdleToJump"`. They are
/// only ever used as lookup keys, so `Clone` is not required.
pub trait Action: Eq + Hash + Debug {}

impl<T> Action for T where T: Eq + Hash + Debug {}
