//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine driven by a single action.
//!
//! Key concepts:
//! - One action label reused from every state
//! - Completion hook reporting each change
//! - A pedestrian button that only works from Green
//!
//! Run with: RUST_LOG=statetable=debug cargo run --example traffic_light

use statetable::StateMachineBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum TrafficLight {
    Red,
    Yellow,
    Green,
}

#[derive(PartialEq, Eq, Hash, Debug)]
enum Signal {
    Timer,
    Pedestrian,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .action(Signal::Timer, TrafficLight::Red, TrafficLight::Green)
        .action(Signal::Timer, TrafficLight::Green, TrafficLight::Yellow)
        .action(Signal::Timer, TrafficLight::Yellow, TrafficLight::Red)
        .action(Signal::Pedestrian, TrafficLight::Green, TrafficLight::Yellow)
        .build()?;

    println!("Initial state: {:?}\n", machine.current_state());

    for tick in 1..=4 {
        machine.execute_with(&Signal::Timer, |old, new| {
            println!("  tick {tick}: {old:?} -> {new:?}");
        });
    }

    println!("\nPedestrian button pressed at {:?}:", machine.current_state());
    println!("  accepted: {}", machine.can_execute(&Signal::Pedestrian));
    machine.execute(&Signal::Pedestrian);
    println!("  now: {:?}", machine.current_state());

    println!("\nPedestrian button pressed at {:?}:", machine.current_state());
    println!("  accepted: {}", machine.can_execute(&Signal::Pedestrian));
    machine.execute(&Signal::Pedestrian);
    println!("  now: {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
