//! Host-object field adapter.
//!
//! Hosts that model several stateful fields (two locks on one door,
//! one status per document) keep machines out of their own structs by
//! using a [`StateField`]: an explicit map from an owner key to an owned
//! [`Machine`], all minted from one shared definition. The adapter is a
//! pure pass-through; every legality decision stays in the machine.

use crate::core::{State, StateInput};
use crate::definition::MachineDefinition;
use crate::machine::{Machine, MachineError};
use std::collections::HashMap;
use std::hash::Hash;

/// One stateful field across many owners.
///
/// A machine is created lazily the first time an owner's field is
/// touched, starting at the definition's initial state.
///
/// # Example
///
/// ```rust
/// use stateset::{state_set, MachineDefinition, StateField};
///
/// state_set! {
///     enum LockState {
///         Open = "open",
///         Locked = "locked",
///     }
/// }
///
/// let lock = MachineDefinition::builder()
///     .states([LockState::Open, LockState::Locked])
///     .allow_empty(false)
///     .initial("open")
///     .named_transition("lock", "locked")
///     .named_transition("open", "open")
///     .build()?;
///
/// let mut locks: StateField<u32, LockState> = StateField::new(lock);
/// assert_eq!(locks.value(1), "open");
///
/// locks.machine_mut(1).apply("lock")?;
/// assert_eq!(locks.value(1), "locked");
/// assert_eq!(locks.value(2), "open");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct StateField<K, S: State> {
    definition: MachineDefinition<S>,
    machines: HashMap<K, Machine<S>>,
}

impl<K: Eq + Hash, S: State> StateField<K, S> {
    /// Create a field over a shared definition.
    pub fn new(definition: MachineDefinition<S>) -> Self {
        Self {
            definition,
            machines: HashMap::new(),
        }
    }

    /// The owner's machine, created on first touch.
    pub fn machine_mut(&mut self, owner: K) -> &mut Machine<S> {
        self.machines
            .entry(owner)
            .or_insert_with(|| self.definition.machine())
    }

    /// The owner's machine, if the field was ever touched for it.
    pub fn machine(&self, owner: &K) -> Option<&Machine<S>> {
        self.machines.get(owner)
    }

    /// The owner's current value; the empty string stands in for a
    /// never-touched or unset field.
    pub fn value(&mut self, owner: K) -> &str {
        self.machine_mut(owner).state().unwrap_or("")
    }

    /// Set the owner's field, creating the machine if needed.
    pub fn set(&mut self, owner: K, input: impl Into<StateInput<S>>) -> Result<(), MachineError> {
        self.machine_mut(owner).set(input)
    }

    /// Owners whose field was touched at least once.
    pub fn owners(&self) -> impl Iterator<Item = &K> {
        self.machines.keys()
    }
}
