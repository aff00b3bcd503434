//! Document Workflow State Machine
//!
//! This example demonstrates a restricted transition graph with named
//! checkers and prefix-resolved input.
//!
//! Key concepts:
//! - Restricted mode: only declared edges are legal
//! - Prefix resolution of partial string input
//! - Named checkers as readable reachability queries
//! - Transition rejection leaves state untouched
//!
//! Run with: cargo run --example document_workflow

use stateset::{state_set, MachineDefinition};

state_set! {
    enum DocState {
        Draft = "draft",
        Review = "review",
        Published = "published",
        Archived = "archived",
    }
}

fn main() {
    println!("=== Document Workflow State Machine ===\n");

    let definition = MachineDefinition::builder()
        .states([
            DocState::Draft,
            DocState::Review,
            DocState::Published,
            DocState::Archived,
        ])
        .initial(DocState::Draft)
        .transition(DocState::Draft, [DocState::Review])
        .transition(DocState::Review, [DocState::Draft, DocState::Published])
        .transition(DocState::Published, [DocState::Archived])
        .named_checker("can_publish", DocState::Published)
        .named_transition_from("archive", DocState::Archived, [DocState::Published])
        .build()
        .unwrap();

    let mut doc = definition.machine();
    println!("Initial state: {:?}\n", doc.state());

    println!("Draft -> Review (using the prefix \"r\")...");
    doc.set("r").unwrap();
    println!("state: {:?}", doc.state());
    println!("can_publish? {}\n", doc.query("can_publish").unwrap());

    println!("Trying to archive straight from review...");
    match doc.apply("archive") {
        Err(err) => println!("  rejected: {err}"),
        Ok(()) => unreachable!(),
    }
    println!("state unchanged: {:?}\n", doc.state());

    println!("Review -> Published -> archive...");
    doc.set("pub").unwrap();
    doc.apply("archive").unwrap();
    println!("state: {:?}\n", doc.state());

    println!("Archived is terminal here: no outgoing edges were declared.");
    for value in ["draft", "review", "published"] {
        println!("  can_be({value})? {}", doc.can_be(value).unwrap());
    }

    println!("\n=== Example Complete ===");
}
