//! Collapse transition specs into one edge per (source, target) pair.

use super::error::{Endpoint, GraphError, GraphResult};
use crate::core::TransitionSpec;
use indexmap::IndexMap;
use tracing::debug;

/// All transition specs that connect one source state to one target state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,

    /// Contributing specs in the order they were declared.
    pub transitions: Vec<TransitionSpec>,
}

/// Group transition specs by (source, target).
///
/// Edges appear in the order their pair was first seen; contributors keep
/// declaration order and duplicates are preserved. A spec with an empty
/// source or target list fails with [`GraphError::InvalidTransition`].
pub fn aggregate(specs: &[TransitionSpec]) -> GraphResult<Vec<Edge>> {
    let mut edges: IndexMap<(String, String), Vec<TransitionSpec>> = IndexMap::new();

    for spec in specs {
        check_endpoints(spec)?;

        for (source, target) in spec.pairs() {
            edges
                .entry((source.to_string(), target.to_string()))
                .or_default()
                .push(spec.clone());
        }
    }

    debug!(
        transitions = specs.len(),
        edges = edges.len(),
        "aggregated transitions"
    );

    Ok(edges
        .into_iter()
        .map(|((source, target), transitions)| Edge {
            source,
            target,
            transitions,
        })
        .collect())
}

pub(crate) fn check_endpoints(spec: &TransitionSpec) -> GraphResult<()> {
    let missing = if spec.from.is_empty() {
        Endpoint::Source
    } else if spec.to.is_empty() {
        Endpoint::Target
    } else {
        return Ok(());
    };

    Err(GraphError::InvalidTransition {
        event: spec.event.clone(),
        missing,
    })
}
