//! Core value types of the state machine.
//!
//! This module contains the pieces the machine is generic over and the table
//! it consults:
//! - `State` and `Action` capability traits
//! - `TransitionTable`, the `(from, action) → to` edge map
//!
//! Nothing in this module logs or mutates anything outside itself.

mod state;
mod table;

pub use state::{Action, State};
pub use table::TransitionTable;
