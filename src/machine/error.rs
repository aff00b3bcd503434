//! Runtime errors raised by machine operations.

use crate::core::ResolveError;
use thiserror::Error;

/// Errors that can occur while operating a [`Machine`].
///
/// Every failure leaves the machine's current state untouched.
///
/// [`Machine`]: crate::Machine
#[derive(Debug, Error)]
pub enum MachineError {
    /// The supplied value did not resolve to exactly one state.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The requested change is not an edge of the transition graph.
    #[error("transition from '{from}' to '{to}' is not allowed")]
    TransitionRejected { from: String, to: String },

    /// Clearing was requested but the definition disallows empty state.
    #[error("this machine does not allow empty state")]
    EmptyDisallowed,

    /// No accessor of the required kind has this name.
    #[error("no accessor named '{name}'")]
    UnknownAccessor { name: String },
}
