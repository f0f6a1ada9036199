//! Build errors for machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building machine definitions and transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{0}' declared more than once")]
    DuplicateState(String),

    #[error("Transition event not specified. Call .event(name)")]
    MissingEvent,

    #[error("Transition source state not specified for event '{event}'. Call .from(state)")]
    MissingSource { event: String },

    #[error("Transition target state not specified for event '{event}'. Call .to(state)")]
    MissingTarget { event: String },
}
