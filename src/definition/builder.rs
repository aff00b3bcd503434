//! Builder for validated machine definitions.

use super::accessor::{AccessorTable, Operation};
use super::error::DefinitionError;
use super::MachineDefinition;
use crate::core::{Resolver, State, StateInput, StateSet, TransitionGraph};

/// Builder for [`MachineDefinition`] with a fluent API.
///
/// Wherever a state is expected, both typed states and partial strings
/// are accepted; strings are resolved by unambiguous prefix during
/// [`build`](Self::build).
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
///     .initial(Task::Todo)
///     .transition(Task::Todo, [Task::Doing])
///     .transition(Task::Doing, [Task::Done, Task::Todo])
///     .build()
///     .unwrap();
///
/// assert!(!definition.graph().is_complete());
/// ```
pub struct DefinitionBuilder<S: State> {
    states: Option<Vec<S>>,
    initial: Option<StateInput<S>>,
    allow_empty: bool,
    transitions: Vec<(StateInput<S>, Vec<StateInput<S>>)>,
    named_checkers: Vec<(String, StateInput<S>)>,
    named_transitions: Vec<(String, StateInput<S>, Option<Vec<StateInput<S>>>)>,
    complete: Option<bool>,
}

impl<S: State> DefinitionBuilder<S> {
    /// Create a new builder. Empty state is allowed by default.
    pub fn new() -> Self {
        Self {
            states: None,
            initial: None,
            allow_empty: true,
            transitions: Vec::new(),
            named_checkers: Vec::new(),
            named_transitions: Vec::new(),
            complete: None,
        }
    }

    /// Declare the state set (required).
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states = Some(states.into_iter().collect());
        self
    }

    /// Set the startup state (optional; typed or string).
    pub fn initial(mut self, state: impl Into<StateInput<S>>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Whether unset is a legal runtime state. Defaults to true; when
    /// false an initial state is required and [`Machine::clear`] fails.
    ///
    /// [`Machine::clear`]: crate::Machine::clear
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Declare the states reachable from `from` in one step.
    ///
    /// Declaring any transition switches the graph to restricted mode
    /// unless [`complete`](Self::complete) overrides it.
    pub fn transition<F, I, T>(mut self, from: F, to: I) -> Self
    where
        F: Into<StateInput<S>>,
        I: IntoIterator<Item = T>,
        T: Into<StateInput<S>>,
    {
        self.transitions.push((
            from.into(),
            to.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Declare a named checker: a boolean accessor equivalent to
    /// `can_be(target)`.
    pub fn named_checker(mut self, name: impl Into<String>, target: impl Into<StateInput<S>>) -> Self {
        self.named_checkers.push((name.into(), target.into()));
        self
    }

    /// Declare a named transition reachable from every state: an
    /// imperative accessor equivalent to `set(target)`, with an edge
    /// added from each state to the target.
    pub fn named_transition(
        mut self,
        name: impl Into<String>,
        target: impl Into<StateInput<S>>,
    ) -> Self {
        self.named_transitions
            .push((name.into(), target.into(), None));
        self
    }

    /// Declare a named transition restricted to the listed source
    /// states. An empty list adds no edges at all: the target stays
    /// unreachable through this declaration.
    pub fn named_transition_from<F, I, T>(mut self, name: F, target: T, sources: I) -> Self
    where
        F: Into<String>,
        T: Into<StateInput<S>>,
        I: IntoIterator,
        I::Item: Into<StateInput<S>>,
    {
        self.named_transitions.push((
            name.into(),
            target.into(),
            Some(sources.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Override complete mode. Without this the graph is complete iff no
    /// transitions and no named transitions were declared.
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    /// Run the one-time validation pass and produce the definition.
    ///
    /// Validation order: state set presence and shape, value uniqueness
    /// (resolver construction), initial state resolution, the
    /// empty-state policy, graph normalization, then accessor
    /// installation — per-state accessors first, then named checkers,
    /// then named transitions, first declared first installed.
    pub fn build(self) -> Result<MachineDefinition<S>, DefinitionError> {
        let states = self.states.ok_or(DefinitionError::MissingStates)?;
        if states.is_empty() {
            return Err(DefinitionError::InvalidStates);
        }
        let states = StateSet::new(states);
        let resolver = Resolver::new(&states)?;

        let initial = match self.initial {
            Some(input) => Some(resolver.resolve(input)?),
            None => None,
        };
        if !self.allow_empty && initial.is_none() {
            return Err(DefinitionError::EmptyDisallowed);
        }

        let declared = !self.transitions.is_empty() || !self.named_transitions.is_empty();
        let complete = self.complete.unwrap_or(!declared);
        let mut graph = TransitionGraph::new(&states, complete);

        for (from, targets) in self.transitions {
            let from = resolver.resolve(from)?;
            for to in targets {
                let to = resolver.resolve(to)?;
                graph.add_edge(&from, &to);
            }
        }

        let mut accessors = AccessorTable::new();
        for state in &states {
            accessors.insert(format!("is_{}", state.value()), Operation::Is(state.clone()))?;
            accessors.insert(format!("set_{}", state.value()), Operation::Set(state.clone()))?;
            accessors.insert(
                format!("can_be_{}", state.value()),
                Operation::CanBe(state.clone()),
            )?;
        }
        for (name, target) in self.named_checkers {
            let target = resolver.resolve(target)?;
            accessors.insert(name, Operation::CanBe(target))?;
        }
        for (name, target, sources) in self.named_transitions {
            let target = resolver.resolve(target)?;
            match sources {
                None => graph.add_edge_from_every(&target),
                Some(sources) => {
                    for source in sources {
                        let source = resolver.resolve(source)?;
                        graph.add_edge(&source, &target);
                    }
                }
            }
            accessors.insert(name, Operation::Set(target))?;
        }

        Ok(MachineDefinition::from_parts(
            states,
            resolver,
            graph,
            initial,
            self.allow_empty,
            accessors,
        ))
    }
}

impl<S: State> Default for DefinitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResolveError;
    use crate::state_set;

    state_set! {
        enum Counting {
            One = "one",
            Two = "two",
            Three = "three",
        }
    }

    const ALL: [Counting; 3] = [Counting::One, Counting::Two, Counting::Three];

    #[test]
    fn builder_requires_states() {
        let result = DefinitionBuilder::<Counting>::new().build();
        assert!(matches!(result, Err(DefinitionError::MissingStates)));
    }

    #[test]
    fn builder_rejects_empty_state_set() {
        let result = DefinitionBuilder::<Counting>::new().states([]).build();
        assert!(matches!(result, Err(DefinitionError::InvalidStates)));
    }

    #[test]
    fn builder_rejects_duplicate_values() {
        state_set! {
            enum Clashing {
                Open = "open",
                AlsoOpen = "open",
            }
        }

        let result = DefinitionBuilder::new()
            .states([Clashing::Open, Clashing::AlsoOpen])
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::Resolve(ResolveError::DuplicateValue { .. }))
        ));
    }

    #[test]
    fn complete_defaults_to_no_declared_transitions() {
        let definition = DefinitionBuilder::new().states(ALL).build().unwrap();
        assert!(definition.graph().is_complete());

        let definition = DefinitionBuilder::new()
            .states(ALL)
            .transition(Counting::One, [Counting::Two])
            .build()
            .unwrap();
        assert!(!definition.graph().is_complete());

        let definition = DefinitionBuilder::new()
            .states(ALL)
            .named_transition("finish", Counting::Three)
            .build()
            .unwrap();
        assert!(!definition.graph().is_complete());
    }

    #[test]
    fn complete_override_wins() {
        let definition = DefinitionBuilder::new()
            .states(ALL)
            .transition(Counting::One, [Counting::Two])
            .complete(true)
            .build()
            .unwrap();
        assert!(definition.graph().is_complete());

        let definition = DefinitionBuilder::new()
            .states(ALL)
            .complete(false)
            .build()
            .unwrap();
        assert!(!definition.graph().is_complete());
    }

    #[test]
    fn transition_endpoints_accept_prefixes() {
        let definition = DefinitionBuilder::<Counting>::new()
            .states(ALL)
            .transition("o", ["tw", "th"])
            .build()
            .unwrap();

        let graph = definition.graph();
        assert!(graph.can_transition(Some(&Counting::One), &Counting::Two));
        assert!(graph.can_transition(Some(&Counting::One), &Counting::Three));
        assert!(!graph.can_transition(Some(&Counting::Two), &Counting::One));
    }

    #[test]
    fn unresolvable_transition_endpoint_fails_build() {
        let result = DefinitionBuilder::<Counting>::new()
            .states(ALL)
            .transition("t", ["one"])
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::Resolve(ResolveError::Ambiguous { .. }))
        ));
    }

    #[test]
    fn initial_state_resolves_through_prefixes() {
        let definition = DefinitionBuilder::<Counting>::new()
            .states(ALL)
            .initial("tw")
            .build()
            .unwrap();
        assert_eq!(definition.initial(), Some(&Counting::Two));
    }

    #[test]
    fn foreign_initial_state_is_rejected() {
        let result = DefinitionBuilder::new()
            .states([Counting::One, Counting::Two])
            .initial(Counting::Three)
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::Resolve(ResolveError::ForeignValue { .. }))
        ));
    }

    #[test]
    fn disallowed_empty_requires_initial_state() {
        let result = DefinitionBuilder::<Counting>::new()
            .states(ALL)
            .allow_empty(false)
            .build();
        assert!(matches!(result, Err(DefinitionError::EmptyDisallowed)));

        let definition = DefinitionBuilder::<Counting>::new()
            .states(ALL)
            .allow_empty(false)
            .initial("one")
            .build()
            .unwrap();
        assert!(!definition.allows_empty());
        assert_eq!(definition.initial(), Some(&Counting::One));
    }

    #[test]
    fn per_state_accessors_are_installed() {
        let definition = DefinitionBuilder::new().states(ALL).build().unwrap();
        let accessors = definition.accessors();

        for value in ["one", "two", "three"] {
            assert!(accessors.get(&format!("is_{value}")).is_some());
            assert!(accessors.get(&format!("set_{value}")).is_some());
            assert!(accessors.get(&format!("can_be_{value}")).is_some());
        }
        assert_eq!(accessors.len(), 9);
    }

    #[test]
    fn named_checker_collision_names_the_late_declaration() {
        let result = DefinitionBuilder::new()
            .states(ALL)
            .named_checker("is_one", Counting::One)
            .build();
        match result {
            Err(DefinitionError::NameCollision { name }) => assert_eq!(name, "is_one"),
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn named_transition_collides_with_named_checker() {
        let result = DefinitionBuilder::new()
            .states(ALL)
            .named_checker("advance", Counting::Two)
            .named_transition("advance", Counting::Two)
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::NameCollision { .. })
        ));
    }

    #[test]
    fn reserved_engine_names_collide() {
        let result = DefinitionBuilder::new()
            .states(ALL)
            .named_transition("clear", Counting::One)
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::NameCollision { .. })
        ));
    }

    #[test]
    fn named_transition_without_sources_reaches_from_everywhere() {
        let definition = DefinitionBuilder::new()
            .states(ALL)
            .named_transition("finish", Counting::Three)
            .build()
            .unwrap();

        let graph = definition.graph();
        for from in ALL.iter() {
            assert!(graph.can_transition(Some(from), &Counting::Three));
        }
        assert!(!graph.can_transition(Some(&Counting::One), &Counting::Two));
    }

    #[test]
    fn named_transition_with_sources_adds_only_those_edges() {
        let definition = DefinitionBuilder::new()
            .states(ALL)
            .named_transition_from("finish", Counting::Three, [Counting::Two])
            .build()
            .unwrap();

        let graph = definition.graph();
        assert!(graph.can_transition(Some(&Counting::Two), &Counting::Three));
        assert!(!graph.can_transition(Some(&Counting::One), &Counting::Three));
    }

    #[test]
    fn named_transition_with_empty_sources_adds_no_edges() {
        let definition = DefinitionBuilder::new()
            .states(ALL)
            .named_transition_from("finish", Counting::Three, std::iter::empty::<Counting>())
            .build()
            .unwrap();

        let graph = definition.graph();
        for from in ALL.iter() {
            assert!(!graph.can_transition(Some(from), &Counting::Three));
        }
        assert!(definition.accessors().get("finish").is_some());
    }
}
