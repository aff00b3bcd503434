//! Stateset: a declarative state machine library
//!
//! Stateset builds validated finite state machines from a declarative
//! description: a fixed set of valued states, an optional transition
//! table, and optional named checkers and transitions. Validation runs
//! once, when the definition is built; afterwards every read and write
//! goes through a runtime [`Machine`] that enforces transition legality.
//!
//! # Core Concepts
//!
//! - **States**: a fixed enumeration with unique string values, declared
//!   with the [`state_set!`] macro or a hand-written [`core::State`] impl
//! - **Prefix resolution**: any unambiguous prefix of a state's value is
//!   accepted wherever a state is expected (`"lo"` for `"locked"`)
//! - **Transition graph**: either complete (every change legal) or
//!   restricted to the declared edges
//! - **Generated accessors**: `is_*`, `set_*` and `can_be_*` entries per
//!   state, plus user-declared named checkers and transitions, dispatched
//!   by name through [`Machine::query`] and [`Machine::apply`]
//!
//! # Example
//!
//! ```rust
//! use stateset::{state_set, MachineDefinition};
//!
//! state_set! {
//!     enum Task {
//!         Todo = "todo",
//!         Doing = "doing",
//!         Done = "done",
//!     }
//! }
//!
//! let definition = MachineDefinition::builder()
//!     .states([Task::Todo, Task::Doing, Task::Done])
//!     .initial(Task::Todo)
//!     .transition(Task::Todo, [Task::Doing])
//!     .transition(Task::Doing, [Task::Done, Task::Todo])
//!     .build()?;
//!
//! let mut task = definition.machine();
//! assert_eq!(task.state(), Some("todo"));
//!
//! task.set("doing")?;
//! assert!(task.is("doing")?);
//! assert!(task.can_be("done")?);
//!
//! task.apply("set_done")?;
//! assert!(task.query("is_done")?);
//! assert!(!task.can_be("todo")?); // no edge out of done
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Definitions are immutable and cheap to share; machine instances are
//! plain mutable values with no internal locking.

pub mod attach;
pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use self::attach::StateField;
pub use self::core::{ResolveError, Resolver, State, StateInput, StateSet, TransitionGraph};
pub use self::definition::{
    AccessorTable, DefinitionBuilder, DefinitionError, MachineDefinition, Operation,
};
pub use self::machine::{Machine, MachineError};
