//! Runtime state machine instances.
//!
//! A [`Machine`] owns one current-state slot and a shared handle to its
//! validated [`MachineDefinition`]. Every mutation goes through one
//! checked path: resolve the input, ask the transition graph, then
//! commit. A machine is not internally synchronized; wrap it in a lock
//! if several threads mutate the same instance.

mod error;

pub use error::MachineError;

use crate::core::{State, StateInput};
use crate::definition::{MachineDefinition, Operation};

/// A runtime state machine instance.
///
/// The current state is either unset or exactly one state of the
/// definition's set. Unset is only reachable at creation (when no
/// initial state was declared) or through [`clear`](Self::clear).
///
/// # Example
///
/// ```rust
/// use stateset::{state_set, MachineDefinition};
///
/// state_set! {
///     enum Task {
///         Todo = "todo",
///         Doing = "doing",
///         Done = "done",
///     }
/// }
///
/// let definition = MachineDefinition::builder()
///     .states([Task::Todo, Task::Doing, Task::Done])
///     .build()?;
///
/// let mut task = definition.machine();
/// assert_eq!(task.state(), None);
///
/// task.set("todo")?;
/// task.set(Task::Doing)?;
/// assert_eq!(task.state(), Some("doing"));
/// assert!(task.is("doi")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State> {
    definition: MachineDefinition<S>,
    current: Option<S>,
}

impl<S: State> Machine<S> {
    /// Create an instance at the definition's initial state, or unset.
    pub fn new(definition: MachineDefinition<S>) -> Self {
        let current = definition.initial().cloned();
        Self {
            definition,
            current,
        }
    }

    /// The shared definition this instance was minted from.
    pub fn definition(&self) -> &MachineDefinition<S> {
        &self.definition
    }

    /// Current state's external value, or `None` when unset.
    pub fn state(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.value())
    }

    /// Current state as the typed value, or `None` when unset.
    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Change state. All-or-nothing: the input is resolved and the
    /// transition graph consulted before anything is committed, so a
    /// failed set leaves the current state untouched.
    ///
    /// Re-setting the current state is legal only with a declared
    /// self-edge or in complete mode.
    pub fn set(&mut self, input: impl Into<StateInput<S>>) -> Result<(), MachineError> {
        let target = self.definition.resolver().resolve(input)?;
        if let Some(from) = self.current.as_ref() {
            if !self
                .definition
                .graph()
                .can_transition(Some(from), &target)
            {
                return Err(MachineError::TransitionRejected {
                    from: from.value().to_string(),
                    to: target.value().to_string(),
                });
            }
        }
        self.current = Some(target);
        Ok(())
    }

    /// Reset to unset. Fails when the definition disallows empty state,
    /// regardless of the current state.
    pub fn clear(&mut self) -> Result<(), MachineError> {
        if !self.definition.allows_empty() {
            return Err(MachineError::EmptyDisallowed);
        }
        self.current = None;
        Ok(())
    }

    /// Whether the resolved input equals the current state. Unset never
    /// equals any state.
    pub fn is(&self, input: impl Into<StateInput<S>>) -> Result<bool, MachineError> {
        let target = self.definition.resolver().resolve(input)?;
        Ok(self.current.as_ref() == Some(&target))
    }

    /// Whether a change to the resolved input is currently legal.
    pub fn can_be(&self, input: impl Into<StateInput<S>>) -> Result<bool, MachineError> {
        let target = self.definition.resolver().resolve(input)?;
        Ok(self
            .definition
            .graph()
            .can_transition(self.current.as_ref(), &target))
    }

    /// Evaluate a boolean accessor by name: the generated `is_*` and
    /// `can_be_*` entries plus user-declared named checkers.
    pub fn query(&self, name: &str) -> Result<bool, MachineError> {
        match self.definition.accessors().get(name) {
            Some(Operation::Is(target)) => Ok(self.current.as_ref() == Some(target)),
            Some(Operation::CanBe(target)) => Ok(self
                .definition
                .graph()
                .can_transition(self.current.as_ref(), target)),
            _ => Err(MachineError::UnknownAccessor {
                name: name.to_string(),
            }),
        }
    }

    /// Run an imperative accessor by name: the generated `set_*` entries
    /// plus user-declared named transitions. Subject to the same
    /// transition check as [`set`](Self::set).
    pub fn apply(&mut self, name: &str) -> Result<(), MachineError> {
        let target = match self.definition.accessors().get(name) {
            Some(Operation::Set(target)) => target.clone(),
            _ => {
                return Err(MachineError::UnknownAccessor {
                    name: name.to_string(),
                })
            }
        };
        self.set(target)
    }
}
