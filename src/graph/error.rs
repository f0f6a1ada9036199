//! Graph construction errors.

use thiserror::Error;

/// Result type alias for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while turning a definition into a graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A transition lists no source or no target state.
    #[error("transition '{event}' has no {missing} states")]
    InvalidTransition { event: String, missing: Endpoint },

    /// A transition, initial state or terminal state names an undeclared state.
    #[error("unknown state '{state}' referenced by {referenced_by}")]
    UnknownStateReference { state: String, referenced_by: String },
}

/// Which side of a transition is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}
