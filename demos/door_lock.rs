//! Door Lock State Machines
//!
//! This example demonstrates attaching one machine type to several
//! fields of a host object.
//!
//! Key concepts:
//! - Named transitions reachable from every state
//! - Disallowing empty state with a mandatory initial state
//! - One shared definition, many independent machine instances
//! - The `StateField` owner-key adapter
//!
//! Run with: cargo run --example door_lock

use stateset::{state_set, MachineDefinition, StateField};

state_set! {
    enum LockState {
        Open = "open",
        Locked = "locked",
    }
}

fn main() {
    println!("=== Door Lock State Machines ===\n");

    let lock = MachineDefinition::builder()
        .states([LockState::Open, LockState::Locked])
        .allow_empty(false)
        .initial("open")
        .named_transition("lock", "locked")
        .named_transition("open", "open")
        .build()
        .unwrap();

    // One definition, one machine per (door, side) pair.
    let mut locks: StateField<&str, LockState> = StateField::new(lock);

    println!("front lock: {}", locks.value("front"));
    println!("back lock:  {}\n", locks.value("back"));

    println!("Locking the front door...");
    locks.machine_mut("front").apply("lock").unwrap();
    println!("front lock: {}", locks.value("front"));
    println!("back lock:  {}\n", locks.value("back"));

    println!("Locking the back door, then opening both...");
    locks.machine_mut("back").apply("lock").unwrap();
    locks.machine_mut("front").apply("open").unwrap();
    locks.machine_mut("back").apply("open").unwrap();
    println!("front lock: {}", locks.value("front"));
    println!("back lock:  {}\n", locks.value("back"));

    println!("Clearing a lock's state is rejected (empty disallowed):");
    let err = locks.machine_mut("front").clear().unwrap_err();
    println!("  {err}\n");

    println!("Key Characteristics:");
    println!("- Named transitions double as imperative accessors");
    println!("- allow_empty(false) makes unset unrepresentable after startup");
    println!("- Each owner key gets its own machine, lazily created");

    println!("\n=== Example Complete ===");
}
