//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a declaration macro for creating
//! state machines with their full transition table up front.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
