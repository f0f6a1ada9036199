//! The capability a machine definition must offer to be charted.
//!
//! Charts never parse a state machine DSL. They consume anything that can
//! enumerate its states, transitions, initial states and terminal states.
//! `MachineSpec` is the plain-data implementation; other providers adapt
//! their own representation by implementing `MachineDefinition`.

use super::state::StateSpec;
use super::transition::TransitionSpec;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A resolved state machine definition.
///
/// # Example
///
/// ```rust
/// use statechart_render::core::{MachineDefinition, StateSpec, TransitionSpec};
///
/// struct Door;
///
/// impl MachineDefinition for Door {
///     fn name(&self) -> &str {
///         "door"
///     }
///
///     fn states(&self) -> Vec<StateSpec> {
///         vec![StateSpec::new("open"), StateSpec::new("closed")]
///     }
///
///     fn transitions(&self) -> Vec<TransitionSpec> {
///         vec![
///             TransitionSpec::new("close", ["open"], ["closed"]),
///             TransitionSpec::new("open", ["closed"], ["open"]),
///         ]
///     }
///
///     fn initial_states(&self) -> Vec<String> {
///         vec!["closed".to_string()]
///     }
/// }
///
/// assert!(Door.terminal_states().is_empty());
/// ```
pub trait MachineDefinition {
    /// Name used for the rendered graph.
    fn name(&self) -> &str;

    /// States in declared order.
    fn states(&self) -> Vec<StateSpec>;

    /// Transitions in declared order.
    fn transitions(&self) -> Vec<TransitionSpec>;

    /// Identifiers of the states the machine may start in.
    fn initial_states(&self) -> Vec<String>;

    /// Identifiers of terminal states.
    ///
    /// Default implementation returns no terminal states.
    fn terminal_states(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<D: MachineDefinition + ?Sized> MachineDefinition for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn states(&self) -> Vec<StateSpec> {
        (**self).states()
    }

    fn transitions(&self) -> Vec<TransitionSpec> {
        (**self).transitions()
    }

    fn initial_states(&self) -> Vec<String> {
        (**self).initial_states()
    }

    fn terminal_states(&self) -> Vec<String> {
        (**self).terminal_states()
    }
}

/// Plain-data machine definition.
///
/// Built with [`MachineBuilder`](crate::builder::MachineBuilder) or loaded
/// from JSON:
///
/// ```rust
/// use statechart_render::core::{MachineDefinition, MachineSpec};
///
/// let spec = MachineSpec::from_json(r#"{
///     "name": "claim",
///     "states": [{"id": "open"}, {"id": "closed", "enter": ["archive"]}],
///     "transitions": [{"event": "close", "from": ["open"], "to": ["closed"]}],
///     "initial": ["open"],
///     "terminal": ["closed"]
/// }"#).unwrap();
///
/// assert_eq!(spec.name(), "claim");
/// assert_eq!(spec.states().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSpec {
    pub name: String,

    #[serde(default)]
    pub states: Vec<StateSpec>,

    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,

    #[serde(default)]
    pub initial: Vec<String>,

    #[serde(default)]
    pub terminal: Vec<String>,
}

impl MachineSpec {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a definition from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl MachineDefinition for MachineSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn states(&self) -> Vec<StateSpec> {
        self.states.clone()
    }

    fn transitions(&self) -> Vec<TransitionSpec> {
        self.transitions.clone()
    }

    fn initial_states(&self) -> Vec<String> {
        self.initial.clone()
    }

    fn terminal_states(&self) -> Vec<String> {
        self.terminal.clone()
    }
}
