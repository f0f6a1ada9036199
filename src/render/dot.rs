//! Graphviz DOT serialization of chart graphs.

use crate::graph::{Graph, Node, NodeId};

const START_ATTRS: &str = r#"shape=circle, style=filled, fillcolor=black, label="", width=0.25"#;
const END_ATTRS: &str = r#"shape=doublecircle, style=filled, fillcolor=black, label="", width=0.2"#;
const STATE_ID_PREFIX: &str = "s:";

/// Serialize a graph as DOT source.
///
/// `directed` selects `digraph`/`->` or `graph`/`--`; it has no other
/// effect on the output.
pub fn to_dot(graph: &Graph, directed: bool) -> String {
    let (keyword, connector) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = format!("{keyword} {} {{\n", quote(graph.name()));
    out.push_str("  node [fontname=\"Arial\"];\n");
    out.push_str("  edge [fontname=\"Arial\", fontsize=10];\n");

    for node in graph.nodes() {
        out.push_str(&format!("  {} [{}];\n", dot_id(&node.id), node_attrs(node)));
    }

    for edge in graph.edges() {
        let endpoints = format!(
            "  {} {connector} {}",
            dot_id(&edge.source),
            dot_id(&edge.target)
        );
        match &edge.label {
            Some(label) => out.push_str(&format!("{endpoints} [label={}];\n", quote(label))),
            None => out.push_str(&format!("{endpoints};\n")),
        }
    }

    out.push_str("}\n");
    out
}

fn node_attrs(node: &Node) -> String {
    match (&node.id, &node.label) {
        (NodeId::Start, _) => START_ATTRS.to_string(),
        (NodeId::End, _) => END_ATTRS.to_string(),
        (NodeId::State(_), Some(markup)) => format!("shape=Mrecord, label=<{markup}>"),
        (NodeId::State(id), None) => format!("shape=Mrecord, label={}", quote(id)),
    }
}

/// DOT identifier of a node.
///
/// States live under a `s:` prefix and sentinels are bare `start`/`end`,
/// so a state named after a sentinel still gets its own DOT node.
fn dot_id(id: &NodeId) -> String {
    match id {
        NodeId::Start => quote("start"),
        NodeId::End => quote("end"),
        NodeId::State(state) => quote(&format!("{STATE_ID_PREFIX}{state}")),
    }
}

/// Quote a DOT string, escaping quotes, backslashes and line breaks.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
