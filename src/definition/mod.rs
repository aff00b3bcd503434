//! Machine definitions: declarative construction and one-time validation.
//!
//! A [`MachineDefinition`] is produced once per machine type by the
//! [`DefinitionBuilder`] validation pass and never mutated afterwards.
//! It is cheap to clone (the validated parts sit behind an `Arc`) and
//! safe to share read-only across any number of machines.

pub mod accessor;
pub mod builder;
pub mod error;
pub mod macros;

pub use accessor::{AccessorTable, Operation};
pub use builder::DefinitionBuilder;
pub use error::DefinitionError;

use crate::core::{Resolver, State, StateSet, TransitionGraph};
use crate::machine::Machine;
use std::sync::Arc;

#[derive(Debug)]
struct Inner<S: State> {
    states: StateSet<S>,
    resolver: Resolver<S>,
    graph: TransitionGraph<S>,
    initial: Option<S>,
    allow_empty: bool,
    accessors: AccessorTable<S>,
}

/// The immutable, validated configuration of one machine type.
///
/// Obtained from [`MachineDefinition::builder`]; mint runtime instances
/// with [`machine`](Self::machine).
#[derive(Clone, Debug)]
pub struct MachineDefinition<S: State> {
    inner: Arc<Inner<S>>,
}

impl<S: State> MachineDefinition<S> {
    /// Start declaring a machine type.
    pub fn builder() -> DefinitionBuilder<S> {
        DefinitionBuilder::new()
    }

    pub(crate) fn from_parts(
        states: StateSet<S>,
        resolver: Resolver<S>,
        graph: TransitionGraph<S>,
        initial: Option<S>,
        allow_empty: bool,
        accessors: AccessorTable<S>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                states,
                resolver,
                graph,
                initial,
                allow_empty,
                accessors,
            }),
        }
    }

    /// Create a machine instance starting at the definition's initial
    /// state, or unset when none was declared.
    pub fn machine(&self) -> Machine<S> {
        Machine::new(self.clone())
    }

    /// The declared state set.
    pub fn states(&self) -> &StateSet<S> {
        &self.inner.states
    }

    /// The value resolver built over the state set.
    pub fn resolver(&self) -> &Resolver<S> {
        &self.inner.resolver
    }

    /// The normalized transition graph.
    pub fn graph(&self) -> &TransitionGraph<S> {
        &self.inner.graph
    }

    /// The validated initial state, if one was declared.
    pub fn initial(&self) -> Option<&S> {
        self.inner.initial.as_ref()
    }

    /// Whether unset is a legal runtime state.
    pub fn allows_empty(&self) -> bool {
        self.inner.allow_empty
    }

    /// The generated accessor table.
    pub fn accessors(&self) -> &AccessorTable<S> {
        &self.inner.accessors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_set;

    state_set! {
        enum Light {
            Red = "red",
            Green = "green",
        }
    }

    #[test]
    fn definition_is_shared_not_copied() {
        let definition = MachineDefinition::builder()
            .states([Light::Red, Light::Green])
            .build()
            .unwrap();

        let clone = definition.clone();
        assert!(Arc::ptr_eq(&definition.inner, &clone.inner));
    }

    #[test]
    fn machines_minted_from_one_definition_share_it() {
        let definition = MachineDefinition::builder()
            .states([Light::Red, Light::Green])
            .initial(Light::Red)
            .build()
            .unwrap();

        let a = definition.machine();
        let b = definition.machine();
        assert_eq!(a.state(), Some("red"));
        assert_eq!(b.state(), Some("red"));
    }
}
