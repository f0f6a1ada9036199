//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{MachineSpec, StateSpec, TransitionSpec};

/// Builder for constructing a [`MachineSpec`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    name: String,
    states: Vec<StateSpec>,
    transitions: Vec<TransitionSpec>,
    initial: Vec<String>,
    terminal: Vec<String>,
}

impl MachineBuilder {
    /// Create a new builder for a machine with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a state.
    pub fn state(mut self, state: StateSpec) -> Self {
        self.states.push(state);
        self
    }

    /// Add an initial state (at least one required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial.push(state.into());
        self
    }

    /// Mark a state as terminal.
    pub fn terminal(mut self, state: impl Into<String>) -> Self {
        self.terminal.push(state.into());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionSpec) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<TransitionSpec>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the definition.
    /// Returns an error if no initial state is set or a state id repeats.
    pub fn build(self) -> Result<MachineSpec, BuildError> {
        if self.initial.is_empty() {
            return Err(BuildError::MissingInitialState);
        }

        for (index, state) in self.states.iter().enumerate() {
            if self.states[..index].iter().any(|s| s.id == state.id) {
                return Err(BuildError::DuplicateState(state.id.clone()));
            }
        }

        Ok(MachineSpec {
            name: self.name,
            states: self.states,
            transitions: self.transitions,
            initial: self.initial,
            terminal: self.terminal,
        })
    }
}
