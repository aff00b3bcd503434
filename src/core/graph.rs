//! Normalized adjacency structure of legal one-step state changes.

use super::state::{State, StateSet};
use std::collections::{HashMap, HashSet};

/// Mapping from each state to the set of states reachable in one step.
///
/// Every state in the set has an entry, possibly empty, so lookups never
/// need an existence check. In complete mode every state may change to
/// every other state and the declared edges are irrelevant.
#[derive(Clone, Debug)]
pub struct TransitionGraph<S: State> {
    edges: HashMap<S, HashSet<S>>,
    complete: bool,
}

impl<S: State> TransitionGraph<S> {
    /// Create a graph with an empty edge set per state.
    pub fn new(states: &StateSet<S>, complete: bool) -> Self {
        let edges = states
            .iter()
            .map(|s| (s.clone(), HashSet::new()))
            .collect();
        Self { edges, complete }
    }

    /// Whether every state may reach every other state.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Add one edge. Endpoints must already be resolved members of the
    /// state set.
    pub fn add_edge(&mut self, from: &S, to: &S) {
        self.edges
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    /// Add an edge from every state to `to`, the expansion of a named
    /// transition declared without a source list.
    pub fn add_edge_from_every(&mut self, to: &S) {
        for targets in self.edges.values_mut() {
            targets.insert(to.clone());
        }
    }

    /// Whether a change to `to` is legal from `from`.
    ///
    /// Always true in complete mode. Always true when `from` is `None`:
    /// a machine with no state yet has nothing to violate. Otherwise the
    /// edge must have been declared.
    pub fn can_transition(&self, from: Option<&S>, to: &S) -> bool {
        if self.complete {
            return true;
        }
        let Some(from) = from else {
            return true;
        };
        self.edges.get(from).is_some_and(|targets| targets.contains(to))
    }

    /// States reachable from `from` in one step, ignoring complete mode.
    pub fn targets<'a>(&'a self, from: &S) -> impl Iterator<Item = &'a S> {
        self.edges.get(from).into_iter().flatten()
    }
}
