//! Macros for declarative state machine construction.

/// Build a [`StateMachine`](crate::StateMachine) from an initial state and a
/// list of `action => (from, to)` edges.
///
/// # Example
///
/// ```
/// use statetable::state_machine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light { Red, Green, Yellow }
///
/// #[derive(PartialEq, Eq, Hash, Debug)]
/// enum Tick { Go, Slow, Stop }
///
/// let mut machine = state_machine! {
///     initial: Light::Red,
///     Tick::Go => (Light::Red, Light::Green),
///     Tick::Slow => (Light::Green, Light::Yellow),
///     Tick::Stop => (Light::Yellow, Light::Red),
/// };
///
/// machine.execute(&Tick::Go);
/// assert_eq!(machine.current_state(), &Light::Green);
/// ```
#[macro_export]
macro_rules! state_machine {
    (
        initial: $initial:expr
        $(, $action:expr => ($from:expr, $to:expr))* $(,)?
    ) => {{
        let mut machine = $crate::StateMachine::new($initial);
        $(
            machine.add_action($action, $from, $to);
        )*
        machine
    }};
}
