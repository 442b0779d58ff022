//! Connection Handshake
//!
//! This example shares one protocol machine between a network thread and a
//! control thread, and uses the strict execution path to reject out-of-order
//! events.
//!
//! Run with: RUST_LOG=statetable=trace cargo run --example connection_handshake

use statetable::{state_machine, SharedStateMachine, TransitionError};
use std::thread;
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Conn {
    Closed,
    SynSent,
    Established,
    FinWait,
}

#[derive(PartialEq, Eq, Hash, Debug)]
enum Event {
    Connect,
    SynAck,
    Close,
    Ack,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Connection Handshake ===\n");

    let machine = SharedStateMachine::from(state_machine! {
        initial: Conn::Closed,
        Event::Connect => (Conn::Closed, Conn::SynSent),
        Event::SynAck => (Conn::SynSent, Conn::Established),
        Event::Close => (Conn::Established, Conn::FinWait),
        Event::Ack => (Conn::FinWait, Conn::Closed),
    });

    match machine.try_execute(&Event::Ack) {
        Ok(state) => println!("Unexpected ack accepted, now {state:?}"),
        Err(TransitionError::NoTransition { from, action }) => {
            println!("Rejected {action} while {from}")
        }
    }

    machine.execute(&Event::Connect);

    let network = machine.clone();
    thread::spawn(move || {
        network.execute_with(&Event::SynAck, |old, new| {
            println!("network thread: {old:?} -> {new:?}");
        });
    })
    .join()
    .ok();

    println!("Control thread sees {:?}", machine.current_state());

    machine.execute_with(&Event::Close, |_, new| {
        println!("Closing, now {new:?}");
    });
    machine.execute(&Event::Ack);

    println!("Final state: {:?}", machine.current_state());
    println!("\n=== Example Complete ===");
}
