//! Build the chart graph from states and aggregated edges.

use super::aggregate::Edge;
use super::error::{GraphError, GraphResult};
use super::model::{Graph, GraphEdge, Node, NodeId};
use crate::core::{StateSpec, TransitionSpec};
use crate::label::{format_edge_label, format_guard_suffix, node_label};
use crate::options::ChartOptions;
use indexmap::IndexSet;
use tracing::debug;

/// Separator between the rows of an edge label.
pub const EDGE_ROW_SEPARATOR: &str = "\n";

/// Build a graph with a start sentinel, one node per state, an end
/// sentinel when there are terminal states, and all edges.
///
/// Edge order is: start edges, aggregated edges, end edges. Initial and
/// terminal ids are sets: a repeated id yields a single sentinel edge, kept
/// at its first position. Any reference
/// to an undeclared state fails with [`GraphError::UnknownStateReference`].
pub fn build(
    name: &str,
    states: &[StateSpec],
    edges: &[Edge],
    initial: &[String],
    terminal: &[String],
    options: &ChartOptions,
) -> GraphResult<Graph> {
    let mut graph = Graph::new(name);

    graph.add_node(Node::sentinel(NodeId::Start));
    for state in states {
        graph.add_node(Node::state(
            state.id.as_str(),
            node_label(state, options.hide_enter_exit),
        ));
    }
    if !terminal.is_empty() {
        graph.add_node(Node::sentinel(NodeId::End));
    }

    for id in initial.iter().collect::<IndexSet<_>>() {
        let target = resolve(&graph, id, "initial states")?;
        graph.push_edge(GraphEdge {
            source: NodeId::Start,
            target,
            label: None,
        });
    }

    for edge in edges {
        let context = || format!("transition {} -> {}", edge.source, edge.target);
        let source = resolve(&graph, &edge.source, &context())?;
        let target = resolve(&graph, &edge.target, &context())?;
        graph.push_edge(GraphEdge {
            source,
            target,
            label: Some(edge_label(&edge.transitions)),
        });
    }

    for id in terminal.iter().collect::<IndexSet<_>>() {
        let source = resolve(&graph, id, "terminal states")?;
        graph.push_edge(GraphEdge {
            source,
            target: NodeId::End,
            label: None,
        });
    }

    debug!(
        graph = name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built chart graph"
    );

    Ok(graph)
}

/// One formatted row per contributing transition.
pub fn edge_label(transitions: &[TransitionSpec]) -> String {
    transitions
        .iter()
        .map(|t| {
            format_edge_label(
                &t.event,
                &format_guard_suffix(&t.guards),
                &t.before,
                &t.after,
            )
        })
        .collect::<Vec<_>>()
        .join(EDGE_ROW_SEPARATOR)
}

fn resolve(graph: &Graph, state: &str, referenced_by: &str) -> GraphResult<NodeId> {
    let id = NodeId::state(state);
    if graph.contains(&id) {
        Ok(id)
    } else {
        Err(GraphError::UnknownStateReference {
            state: state.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::aggregate;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn three_states() -> Vec<StateSpec> {
        vec![StateSpec::new("a"), StateSpec::new("b"), StateSpec::new("c")]
    }

    #[test]
    fn counts_nodes_and_edges() {
        let specs = vec![
            TransitionSpec::new("x", ["a"], ["b"]),
            TransitionSpec::new("y", ["a", "b"], ["c"]),
        ];
        let edges = aggregate(&specs).unwrap();

        let graph = build(
            "m",
            &three_states(),
            &edges,
            &ids(&["a"]),
            &ids(&["c"]),
            &ChartOptions::default(),
        )
        .unwrap();

        assert_eq!(graph.node_count(), 3 + 2);
        assert_eq!(graph.edge_count(), 3 + 1 + 1);
    }

    #[test]
    fn edges_ordered_start_aggregated_end() {
        let edges = aggregate(&[TransitionSpec::new("x", ["a"], ["b"])]).unwrap();

        let graph = build(
            "m",
            &three_states(),
            &edges,
            &ids(&["a"]),
            &ids(&["b"]),
            &ChartOptions::default(),
        )
        .unwrap();

        let order: Vec<_> = graph
            .edges()
            .iter()
            .map(|e| (e.source.to_string(), e.target.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("(start)".to_string(), "a".to_string()),
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "(end)".to_string()),
            ]
        );
    }

    #[test]
    fn repeated_initial_and_terminal_ids_yield_one_edge_each() {
        let graph = build(
            "m",
            &three_states(),
            &[],
            &ids(&["a", "b", "a"]),
            &ids(&["c", "c"]),
            &ChartOptions::default(),
        )
        .unwrap();

        let start_targets: Vec<_> = graph
            .edges()
            .iter()
            .filter(|e| e.source == NodeId::Start)
            .map(|e| e.target.clone())
            .collect();
        let end_edges = graph
            .edges()
            .iter()
            .filter(|e| e.target == NodeId::End)
            .count();

        assert_eq!(start_targets, vec![NodeId::state("a"), NodeId::state("b")]);
        assert_eq!(end_edges, 1);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn no_terminal_states_no_end_node() {
        let graph = build(
            "m",
            &three_states(),
            &[],
            &ids(&["a"]),
            &[],
            &ChartOptions::default(),
        )
        .unwrap();

        assert!(graph.end_node().is_none());
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn merged_edge_has_one_row_per_spec() {
        let specs = vec![
            TransitionSpec::new("first", ["a"], ["b"]),
            TransitionSpec::new("second", ["a"], ["b"]),
        ];
        let edges = aggregate(&specs).unwrap();

        let graph = build(
            "m",
            &three_states(),
            &edges,
            &ids(&["a"]),
            &[],
            &ChartOptions::default(),
        )
        .unwrap();

        let label = graph.state_edge("a", "b").and_then(|e| e.label.clone());
        assert_eq!(label.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn unknown_edge_state_is_rejected() {
        let edges = aggregate(&[TransitionSpec::new("x", ["a"], ["ghost"])]).unwrap();

        let result = build(
            "m",
            &three_states(),
            &edges,
            &ids(&["a"]),
            &[],
            &ChartOptions::default(),
        );

        assert_eq!(
            result,
            Err(GraphError::UnknownStateReference {
                state: "ghost".to_string(),
                referenced_by: "transition a -> ghost".to_string(),
            })
        );
    }

    #[test]
    fn unknown_initial_or_terminal_state_is_rejected() {
        let options = ChartOptions::default();

        let initial = build("m", &three_states(), &[], &ids(&["z"]), &[], &options);
        let terminal = build("m", &three_states(), &[], &ids(&["a"]), &ids(&["z"]), &options);

        assert!(matches!(
            initial,
            Err(GraphError::UnknownStateReference { .. })
        ));
        assert!(matches!(
            terminal,
            Err(GraphError::UnknownStateReference { .. })
        ));
    }

    #[test]
    fn duplicate_states_collapse_to_one_node() {
        let states = vec![StateSpec::new("a"), StateSpec::new("a").on_enter(["late"])];

        let graph = build("m", &states, &[], &ids(&["a"]), &[], &ChartOptions::default())
            .unwrap();

        assert_eq!(graph.node_count(), 2);
        let label = graph.state_node("a").and_then(|n| n.label.as_deref());
        assert!(!label.unwrap_or_default().contains("late"));
    }

    #[test]
    fn state_can_be_initial_and_terminal() {
        let graph = build(
            "m",
            &[StateSpec::new("only")],
            &[],
            &ids(&["only"]),
            &ids(&["only"]),
            &ChartOptions::default(),
        )
        .unwrap();

        assert!(graph.edge(&NodeId::Start, &NodeId::state("only")).is_some());
        assert!(graph.edge(&NodeId::state("only"), &NodeId::End).is_some());
        assert_eq!(graph.edge_count(), 2);
    }
}
