//! Pure core of the crate: states, value resolution, transition legality.
//!
//! Everything here is built once at definition time and read-only
//! afterwards, which makes it safe to share across concurrent lookups.

mod graph;
mod resolve;
mod state;

pub use graph::TransitionGraph;
pub use resolve::{ResolveError, Resolver, StateInput};
pub use state::{State, StateSet};
