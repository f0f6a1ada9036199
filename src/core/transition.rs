//! Transition specifications as declared by a machine definition.

use super::guard::Guard;
use serde::{Deserialize, Serialize};

/// One declared transition.
///
/// A single spec may connect several sources to several targets; every
/// source/target combination becomes an edge of the chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Event that fires the transition.
    pub event: String,

    /// Source state identifiers.
    pub from: Vec<String>,

    /// Target state identifiers.
    pub to: Vec<String>,

    /// Guards in declared order.
    #[serde(default)]
    pub guards: Vec<Guard>,

    /// Callbacks run before the transition.
    #[serde(default)]
    pub before: Vec<String>,

    /// Callbacks run after the transition.
    #[serde(default)]
    pub after: Vec<String>,
}

impl TransitionSpec {
    /// Create an unguarded transition without callbacks.
    pub fn new<F, T>(event: impl Into<String>, from: F, to: T) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            event: event.into(),
            from: from.into_iter().map(Into::into).collect(),
            to: to.into_iter().map(Into::into).collect(),
            guards: Vec::new(),
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Every (source, target) pair this spec denotes, sources outermost.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.from.iter().flat_map(move |source| {
            self.to
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }
}
