//! Statetable: a generic table-driven finite state machine
//!
//! A [`StateMachine`] holds one current state and a table of legal edges
//! keyed by `(state, action)`. It moves only along declared edges and treats
//! everything else as a no-op, so callers can drive it from UI flows, game
//! logic, protocol handshakes or workflow steps without hand-rolled
//! conditionals.
//!
//! # Core Concepts
//!
//! - **State / Action**: any caller-defined value usable as a hash key
//! - **Transition table**: `(from, action) → to`, last registration wins
//! - **Completion hook**: called with `(previous, new)` only on an actual change
//!
//! # Example
//!
//! ```rust
//! use statetable::StateMachine;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Phase {
//!     Start,
//!     Running,
//!     Done,
//! }
//!
//! let mut machine = StateMachine::new(Phase::Start);
//! machine.add_action("Begin", Phase::Start, Phase::Running);
//! machine.add_action("Finish", Phase::Running, Phase::Done);
//!
//! machine.execute_with("Begin", |old, new| {
//!     assert_eq!((old, new), (&Phase::Start, &Phase::Running));
//! });
//! machine.execute("Finish");
//! assert_eq!(machine.current_state(), &Phase::Done);
//!
//! // No edge for "Begin" out of Done: nothing happens.
//! machine.execute("Begin");
//! assert_eq!(machine.current_state(), &Phase::Done);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod sync;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use self::core::{Action, State, TransitionTable};
pub use machine::{StateMachine, StepResult, TransitionError};
pub use sync::SharedStateMachine;
