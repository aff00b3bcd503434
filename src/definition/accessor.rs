//! Fixed table of generated accessor names.
//!
//! One `is_*`/`set_*`/`can_be_*` entry per state plus the user-declared
//! named checkers and transitions: a name-to-operation table built once
//! at definition time, collision checked as each entry is added, and
//! consulted by the machine's [`query`](crate::Machine::query) and
//! [`apply`](crate::Machine::apply) dispatch.

use super::error::DefinitionError;
use crate::core::State;
use std::collections::BTreeMap;

/// Method names the machine itself already exposes. Generated accessors
/// may not shadow them.
const RESERVED: &[&str] = &[
    "state", "current", "set", "clear", "is", "can_be", "query", "apply",
];

/// The operation a generated accessor name stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation<S> {
    /// `is_{value}`: true iff the machine currently holds this state.
    Is(S),
    /// `can_be_{value}` and named checkers: true iff a change to this
    /// state is currently legal.
    CanBe(S),
    /// `set_{value}` and named transitions: change to this state.
    Set(S),
}

/// Name → operation table for one machine definition.
#[derive(Clone, Debug)]
pub struct AccessorTable<S: State> {
    entries: BTreeMap<String, Operation<S>>,
}

impl<S: State> AccessorTable<S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Install an accessor, failing on any collision with a reserved
    /// name or an already-installed one.
    pub(crate) fn insert(
        &mut self,
        name: String,
        operation: Operation<S>,
    ) -> Result<(), DefinitionError> {
        if RESERVED.contains(&name.as_str()) || self.entries.contains_key(&name) {
            return Err(DefinitionError::NameCollision { name });
        }
        self.entries.insert(name, operation);
        Ok(())
    }

    /// Look up an accessor by name.
    pub fn get(&self, name: &str) -> Option<&Operation<S>> {
        self.entries.get(name)
    }

    /// All installed accessor names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of installed accessors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no accessors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
