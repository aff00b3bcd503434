//! Errors raised while validating a machine definition.

use crate::core::ResolveError;
use thiserror::Error;

/// Errors that can occur when building a [`MachineDefinition`].
///
/// All of these are definition-time failures: no partially-valid
/// definition value ever exists.
///
/// [`MachineDefinition`]: crate::MachineDefinition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// No state set was supplied. Call `.states(..)` before `.build()`.
    #[error("no states supplied; declare the state set before build()")]
    MissingStates,

    /// The supplied state set has no states in it.
    #[error("state set must contain at least one state")]
    InvalidStates,

    /// A state value failed to resolve: duplicate values in the set, a
    /// foreign typed state, or an unrecognized or ambiguous string in
    /// the initial state or a transition declaration.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Empty state is disallowed but no initial state was given.
    #[error("empty state is disallowed but no initial state was given")]
    EmptyDisallowed,

    /// A generated or declared accessor name conflicts with one already
    /// installed.
    #[error("name collision in generated accessors: '{name}'")]
    NameCollision { name: String },
}
