//! Abbreviation-based resolution of input to a unique state.
//!
//! Consumers may address a state by a typed value or by any unambiguous
//! prefix of its string value. The resolver builds its prefix index once
//! per state set; lookups afterwards are read-only and cheap.

use super::state::{State, StateSet};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building a resolver or resolving input.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Two states in the set share the same string value.
    #[error("duplicate state value '{value}'")]
    DuplicateValue { value: String },

    /// A typed state was passed that is not a member of this state set.
    #[error("state '{value}' does not belong to this machine's state set")]
    ForeignValue { value: String },

    /// String input matched no state value.
    #[error("'{input}' does not match any state value")]
    UnrecognizedValue { input: String },

    /// String input matched more than one state value with no exact match.
    #[error("'{input}' is ambiguous, matches: {}", .candidates.join(", "))]
    Ambiguous {
        input: String,
        /// Values of every matching state, in declaration order.
        candidates: Vec<String>,
    },
}

/// Input accepted wherever a state is expected: either an already-typed
/// state or a raw string to be prefix-matched.
#[derive(Clone, Debug)]
pub enum StateInput<S> {
    /// A typed state; resolution only checks set membership.
    Typed(S),
    /// A raw string; resolution prefix-matches it against state values.
    Raw(String),
}

impl<S: State> From<S> for StateInput<S> {
    fn from(state: S) -> Self {
        Self::Typed(state)
    }
}

impl<S: State> From<&str> for StateInput<S> {
    fn from(input: &str) -> Self {
        Self::Raw(input.to_string())
    }
}

impl<S: State> From<String> for StateInput<S> {
    fn from(input: String) -> Self {
        Self::Raw(input)
    }
}

/// Maps typed or partial-string input to exactly one state.
///
/// An exact value match wins over prefix ambiguity: with states valued
/// `open` and `opening`, the input `"open"` resolves even though it is
/// also a prefix of `"opening"`.
///
/// # Example
///
/// ```rust
/// use stateset::core::{Resolver, StateSet};
/// use stateset::state_set;
///
/// state_set! {
///     enum Step {
///         One = "one",
///         Two = "two",
///         Three = "three",
///     }
/// }
///
/// let set = StateSet::new([Step::One, Step::Two, Step::Three]);
/// let resolver = Resolver::new(&set).unwrap();
///
/// assert_eq!(resolver.resolve("o").unwrap(), Step::One);
/// assert_eq!(resolver.resolve("th").unwrap(), Step::Three);
/// assert!(resolver.resolve("t").is_err()); // two or three?
/// ```
#[derive(Clone, Debug)]
pub struct Resolver<S: State> {
    exact: HashMap<String, S>,
    prefixes: HashMap<String, Vec<S>>,
}

impl<S: State> Resolver<S> {
    /// Build the prefix index for a state set.
    ///
    /// Fails with [`ResolveError::DuplicateValue`] if two states share a
    /// value; prefix matching requires values to be unique.
    pub fn new(states: &StateSet<S>) -> Result<Self, ResolveError> {
        let mut exact: HashMap<String, S> = HashMap::new();
        let mut prefixes: HashMap<String, Vec<S>> = HashMap::new();

        for state in states {
            let value = state.value();
            if exact.insert(value.to_string(), state.clone()).is_some() {
                return Err(ResolveError::DuplicateValue {
                    value: value.to_string(),
                });
            }
            for (end, _) in value.char_indices().skip(1) {
                prefixes
                    .entry(value[..end].to_string())
                    .or_default()
                    .push(state.clone());
            }
            prefixes
                .entry(value.to_string())
                .or_default()
                .push(state.clone());
        }

        Ok(Self { exact, prefixes })
    }

    /// Resolve input to exactly one state.
    ///
    /// Typed input succeeds iff the state is a member of the set this
    /// resolver was built over. Raw input resolves by exact value match
    /// first, then by unique prefix.
    pub fn resolve(&self, input: impl Into<StateInput<S>>) -> Result<S, ResolveError> {
        match input.into() {
            StateInput::Typed(state) => {
                if self.exact.get(state.value()) == Some(&state) {
                    Ok(state)
                } else {
                    Err(ResolveError::ForeignValue {
                        value: state.value().to_string(),
                    })
                }
            }
            StateInput::Raw(input) => {
                if let Some(state) = self.exact.get(&input) {
                    return Ok(state.clone());
                }
                match self.prefixes.get(&input) {
                    Some(candidates) if candidates.len() == 1 => Ok(candidates[0].clone()),
                    Some(candidates) => Err(ResolveError::Ambiguous {
                        input,
                        candidates: candidates.iter().map(|s| s.value().to_string()).collect(),
                    }),
                    None => Err(ResolveError::UnrecognizedValue { input }),
                }
            }
        }
    }
}
