//! State specifications consumed from a machine definition.
//!
//! A `StateSpec` carries only what a chart needs to draw a state: its
//! identifier and the names of the actions run when the state is entered
//! or left.

use serde::{Deserialize, Serialize};

/// A single state of a machine definition.
///
/// # Example
///
/// ```rust
/// use statechart_render::core::StateSpec;
///
/// let state = StateSpec::new("pending")
///     .on_enter(["notify_owner"])
///     .on_exit(["clear_timer"]);
///
/// assert_eq!(state.id, "pending");
/// assert_eq!(state.enter, vec!["notify_owner".to_string()]);
/// assert_eq!(state.exit, vec!["clear_timer".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSpec {
    /// Identifier, unique within a machine.
    pub id: String,

    /// Actions run when the state is entered, in declared order.
    #[serde(default)]
    pub enter: Vec<String>,

    /// Actions run when the state is left, in declared order.
    #[serde(default)]
    pub exit: Vec<String>,
}

impl StateSpec {
    /// Create a state with no enter or exit actions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enter: Vec::new(),
            exit: Vec::new(),
        }
    }

    /// Append enter actions.
    pub fn on_enter<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.enter.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append exit actions.
    pub fn on_exit<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.exit.extend(names.into_iter().map(Into::into));
        self
    }
}
