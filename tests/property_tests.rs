//! Property-based tests for the resolver, graph, and machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use stateset::core::State;
use stateset::{state_set, MachineDefinition, ResolveError};

state_set! {
    enum Compass {
        North = "north",
        East = "east",
        South = "south",
        West = "west",
    }
}

const ALL: [Compass; 4] = [Compass::North, Compass::East, Compass::South, Compass::West];

fn complete_definition() -> MachineDefinition<Compass> {
    MachineDefinition::builder().states(ALL).build().unwrap()
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> Compass {
        match variant {
            0 => Compass::North,
            1 => Compass::East,
            2 => Compass::South,
            _ => Compass::West,
        }
    }
}

prop_compose! {
    fn arbitrary_prefix()(state in arbitrary_state(), len in 1usize..5) -> String {
        let value = state.value();
        value[..len.min(value.len())].to_string()
    }
}

proptest! {
    #[test]
    fn full_value_resolves_to_its_state(state in arbitrary_state()) {
        let definition = complete_definition();
        let resolved = definition.resolver().resolve(state.value()).unwrap();
        prop_assert_eq!(resolved, state);
    }

    #[test]
    fn typed_state_resolves_to_itself(state in arbitrary_state()) {
        let definition = complete_definition();
        let resolved = definition.resolver().resolve(state.clone()).unwrap();
        prop_assert_eq!(resolved, state);
    }

    #[test]
    fn resolution_is_deterministic(prefix in arbitrary_prefix()) {
        let definition = complete_definition();
        let first = definition.resolver().resolve(prefix.as_str());
        let second = definition.resolver().resolve(prefix.as_str());
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            other => prop_assert!(false, "diverging resolution: {:?}", other),
        }
    }

    #[test]
    fn every_prefix_resolves_or_fails_cleanly(prefix in arbitrary_prefix()) {
        // Values here share no prefix except the full-value matches, so
        // any generated prefix must resolve; garbage must not.
        let definition = complete_definition();
        let resolved = definition.resolver().resolve(prefix.as_str()).unwrap();
        prop_assert!(resolved.value().starts_with(&prefix));
    }

    #[test]
    fn arbitrary_garbage_never_resolves(input in "[a-z]{6,12}") {
        let definition = complete_definition();
        prop_assume!(ALL.iter().all(|s| s.value() != input));
        let result = definition.resolver().resolve(input.as_str());
        prop_assert!(matches!(result, Err(ResolveError::UnrecognizedValue { .. })), "expected UnrecognizedValue error");
    }

    #[test]
    fn set_get_roundtrip_in_complete_mode(state in arbitrary_state()) {
        let mut machine = complete_definition().machine();
        machine.set(state.clone()).unwrap();
        prop_assert_eq!(machine.state(), Some(state.value()));
    }

    #[test]
    fn complete_mode_allows_every_target(path in prop::collection::vec(arbitrary_state(), 0..8), probe in arbitrary_state()) {
        let mut machine = complete_definition().machine();
        for state in path {
            machine.set(state).unwrap();
        }
        prop_assert!(machine.can_be(probe).unwrap());
    }

    #[test]
    fn failed_set_never_mutates(state in arbitrary_state()) {
        let definition = MachineDefinition::builder()
            .states(ALL)
            .complete(false)
            .build()
            .unwrap();
        let mut machine = definition.machine();
        machine.set(state.clone()).unwrap(); // unset source, always legal

        // No edges declared at all: every further set must fail.
        for target in ALL {
            prop_assert!(machine.set(target).is_err());
        }
        prop_assert_eq!(machine.state(), Some(state.value()));
    }

    #[test]
    fn query_agrees_with_is(current in arbitrary_state(), probe in arbitrary_state()) {
        let mut machine = complete_definition().machine();
        machine.set(current).unwrap();
        let by_name = machine.query(&format!("is_{}", probe.value())).unwrap();
        let by_value = machine.is(probe).unwrap();
        prop_assert_eq!(by_name, by_value);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Compass = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
