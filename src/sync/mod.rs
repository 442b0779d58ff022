//! Thread-safe access to a single machine.
//!
//! A plain [`StateMachine`](crate::StateMachine) has no internal
//! synchronization. Wrap it in a [`SharedStateMachine`] when several threads
//! register edges or execute actions on the same instance.

mod shared;

pub use shared::SharedStateMachine;
