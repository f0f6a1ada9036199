//! Property-based tests for chart construction.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machine definitions.

use proptest::prelude::*;
use statechart_render::core::{Guard, MachineSpec, StateSpec, TransitionSpec};
use statechart_render::graph::{aggregate, NodeId};
use statechart_render::label::format_guard_suffix;
use statechart_render::{ChartOptions, ChartRenderer};
use std::collections::HashSet;

const STATES: [&str; 4] = ["a", "b", "c", "d"];

prop_compose! {
    fn arbitrary_state_id()(index in 0..STATES.len()) -> String {
        STATES[index].to_string()
    }
}

fn arbitrary_guard() -> impl Strategy<Value = Guard> {
    let leaf = "[a-z]{1,6}_guard".prop_map(Guard::Name);
    leaf.prop_recursive(3, 12, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Guard::Group)
    })
}

prop_compose! {
    fn arbitrary_transition()(
        event in "[a-z]{1,5}",
        from in prop::collection::vec(arbitrary_state_id(), 1..3),
        to in prop::collection::vec(arbitrary_state_id(), 1..3),
        guards in prop::collection::vec(arbitrary_guard(), 0..3),
        before in prop::collection::vec("[a-z]{1,4}_before", 0..3),
        after in prop::collection::vec("[a-z]{1,4}_after", 0..3),
    ) -> TransitionSpec {
        TransitionSpec { event, from, to, guards, before, after }
    }
}

prop_compose! {
    fn arbitrary_machine()(
        transitions in prop::collection::vec(arbitrary_transition(), 0..8),
        initial in prop::collection::vec(arbitrary_state_id(), 1..3),
        terminal in prop::collection::vec(arbitrary_state_id(), 1..3),
    ) -> MachineSpec {
        MachineSpec {
            name: "generated".to_string(),
            states: STATES.iter().map(|id| StateSpec::new(*id).on_enter([format!("{id} enter")])).collect(),
            transitions,
            initial,
            terminal,
        }
    }
}

proptest! {
    #[test]
    fn node_and_edge_counts(machine in arbitrary_machine()) {
        let renderer = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();
        let pairs: HashSet<(&str, &str)> = machine
            .transitions
            .iter()
            .flat_map(|t| t.pairs())
            .collect();
        let initial: HashSet<&String> = machine.initial.iter().collect();
        let terminal: HashSet<&String> = machine.terminal.iter().collect();

        prop_assert_eq!(renderer.graph().node_count(), STATES.len() + 2);
        prop_assert_eq!(
            renderer.graph().edge_count(),
            pairs.len() + initial.len() + terminal.len()
        );
    }

    #[test]
    fn every_edge_endpoint_is_a_node(machine in arbitrary_machine()) {
        let renderer = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();
        let graph = renderer.graph();

        for edge in graph.edges() {
            prop_assert!(graph.contains(&edge.source));
            prop_assert!(graph.contains(&edge.target));
            prop_assert_ne!(&edge.target, &NodeId::Start);
        }
    }

    #[test]
    fn building_is_deterministic(machine in arbitrary_machine()) {
        let first = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();
        let second = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();

        prop_assert_eq!(first.graph().edges(), second.graph().edges());
        prop_assert_eq!(first.to_dot(), second.to_dot());
    }

    #[test]
    fn edge_label_has_a_row_per_contributor(
        transitions in prop::collection::vec(arbitrary_transition(), 1..8)
    ) {
        let machine = MachineSpec {
            name: "rows".to_string(),
            states: STATES.iter().map(|id| StateSpec::new(*id)).collect(),
            transitions: transitions.clone(),
            initial: vec!["a".to_string()],
            terminal: Vec::new(),
        };
        let renderer = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();

        for edge in aggregate(&transitions).unwrap() {
            let label = renderer
                .graph()
                .state_edge(&edge.source, &edge.target)
                .and_then(|e| e.label.clone())
                .unwrap_or_default();
            let rows: Vec<&str> = label.split('\n').collect();

            prop_assert_eq!(rows.len(), edge.transitions.len());
            for (row, spec) in rows.iter().zip(&edge.transitions) {
                prop_assert!(row.starts_with(spec.event.as_str()));
            }
        }
    }

    #[test]
    fn guard_suffix_lists_every_name_in_order(
        guards in prop::collection::vec(arbitrary_guard(), 0..4)
    ) {
        let names: Vec<&str> = guards.iter().flat_map(|g| g.names()).collect();
        let suffix = format_guard_suffix(&guards);

        if names.is_empty() {
            prop_assert_eq!(suffix, "");
        } else {
            prop_assert_eq!(suffix, format!("[{}]", names.join(", ")));
        }
    }

    #[test]
    fn hide_enter_exit_keeps_name_rows(machine in arbitrary_machine()) {
        let renderer = ChartRenderer::new(
            &machine,
            ChartOptions::new().hide_enter_exit(true),
        )
        .unwrap();

        for id in STATES {
            let label = renderer
                .graph()
                .state_node(id)
                .and_then(|n| n.label.clone())
                .unwrap_or_default();
            let name_row = format!(r#"<tr><td BORDER="0" ALIGN="CENTER">{}</td></tr>"#, id.to_uppercase());

            prop_assert!(label.contains(&name_row));
            prop_assert!(!label.contains("enter state action"));
        }
    }
}
