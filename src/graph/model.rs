//! The chart graph: typed nodes and labelled edges.

use indexmap::IndexMap;
use std::fmt;

/// Identifier of a chart node.
///
/// The start and end sentinels are separate variants, so no state name can
/// ever collide with them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Start,
    End,
    State(String),
}

impl NodeId {
    /// Identifier of a state node.
    pub fn state(id: impl Into<String>) -> Self {
        NodeId::State(id.into())
    }

    /// The state identifier, if this is not a sentinel.
    pub fn as_state(&self) -> Option<&str> {
        match self {
            NodeId::State(id) => Some(id),
            NodeId::Start | NodeId::End => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, NodeId::State(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Start => f.write_str("(start)"),
            NodeId::End => f.write_str("(end)"),
            NodeId::State(id) => f.write_str(id),
        }
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::state(id)
    }
}

/// A chart node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,

    /// HTML-table markup for states; sentinels carry no label.
    pub label: Option<String>,
}

impl Node {
    pub fn sentinel(id: NodeId) -> Self {
        Self { id, label: None }
    }

    pub fn state(id: impl Into<String>, label: String) -> Self {
        Self {
            id: NodeId::state(id),
            label: Some(label),
        }
    }
}

/// A chart edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,

    /// One row per contributing transition, joined with `\n`.
    /// Edges touching a sentinel carry no label.
    pub label: Option<String>,
}

/// Nodes keyed by identifier plus edges in construction order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    name: String,
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a node. Re-adding an existing identifier is a no-op.
    ///
    /// Returns `true` if the node was inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Append an edge. Both endpoints must already be nodes of the graph.
    pub(crate) fn push_edge(&mut self, edge: GraphEdge) {
        debug_assert!(self.nodes.contains_key(&edge.source));
        debug_assert!(self.nodes.contains_key(&edge.target));
        self.edges.push(edge);
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a state node by its state identifier.
    pub fn state_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(&NodeId::state(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// The edge between two nodes, if any.
    pub fn edge(&self, source: &NodeId, target: &NodeId) -> Option<&GraphEdge> {
        self.edges
            .iter()
            .find(|e| &e.source == source && &e.target == target)
    }

    /// The edge between two states, if any.
    pub fn state_edge(&self, source: &str, target: &str) -> Option<&GraphEdge> {
        self.edge(&NodeId::state(source), &NodeId::state(target))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Identifier of the start sentinel.
    pub fn start_node(&self) -> NodeId {
        NodeId::Start
    }

    /// Identifier of the end sentinel, if the graph has one.
    pub fn end_node(&self) -> Option<NodeId> {
        self.contains(&NodeId::End).then_some(NodeId::End)
    }
}
