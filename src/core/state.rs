//! Core State trait and the ordered set of a machine's states.
//!
//! Every state machine is declared over a fixed enumeration of states.
//! Each state carries a display name and an external string value; the
//! value is what consumers read back and what partial-string input is
//! matched against.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are immutable symbolic values. Each one exposes a display
/// `name` and an external string `value`; values must be unique within
/// one machine's state set (construction fails otherwise, see
/// [`Resolver`](crate::core::Resolver)).
///
/// # Required Traits
///
/// - `Clone` + `PartialEq` + `Eq` + `Hash`: states are compared and used
///   as adjacency keys in the transition graph
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so hosts
///   can persist the values they read back
///
/// The [`state_set!`](crate::state_set) macro derives all of this for a
/// plain enum.
///
/// # Example
///
/// ```rust
/// use stateset::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum LockState {
///     Open,
///     Locked,
/// }
///
/// impl State for LockState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn value(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Locked => "locked",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's display name for diagnostics.
    fn name(&self) -> &str;

    /// Get the state's external string value.
    ///
    /// This is the representation returned by
    /// [`Machine::state`](crate::Machine::state) and the string that
    /// partial input is prefix-matched against.
    fn value(&self) -> &str;
}

/// Ordered collection of a machine type's states.
///
/// Declaration order is preserved; it drives the order in which
/// generated accessor names are installed and the order of ambiguity
/// candidates in error messages. Value uniqueness is not checked here
/// but by the resolver built over the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSet<S: State> {
    states: Vec<S>,
}

impl<S: State> StateSet<S> {
    /// Create a state set from states in declaration order.
    pub fn new(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            states: states.into_iter().collect(),
        }
    }

    /// Iterate the states in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the set has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Membership check by state equality.
    pub fn contains(&self, state: &S) -> bool {
        self.states.iter().any(|s| s == state)
    }
}

impl<'a, S: State> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
