//! The state machine itself.
//!
//! # Key Concepts
//!
//! - **Registration**: `add_action` declares an edge; last write wins
//! - **Eligibility**: `can_execute` is a pure lookup from the current state
//! - **Execution**: `execute` follows an edge and notifies an optional hook
//!   only when the state actually changes

mod error;
mod state_machine;
mod step;

pub use error::TransitionError;
pub use state_machine::StateMachine;
pub use step::StepResult;
