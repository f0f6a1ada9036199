//! Builder for constructing transition specifications.

use crate::builder::error::BuildError;
use crate::core::{Guard, TransitionSpec};

/// Builder for constructing transitions with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    event: Option<String>,
    from: Vec<String>,
    to: Vec<String>,
    guards: Vec<Guard>,
    before: Vec<String>,
    after: Vec<String>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event name (required).
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.event = Some(name.into());
        self
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states.
    pub fn from_any<I, N>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a target state (at least one required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to.push(state.into());
        self
    }

    /// Add a guard (optional). Accepts names, groups or nested vectors.
    pub fn guard(mut self, guard: impl Into<Guard>) -> Self {
        self.guards.push(guard.into());
        self
    }

    /// Add several guards at once, e.g. from [`guards!`](crate::guards).
    pub fn guards(mut self, guards: impl IntoIterator<Item = Guard>) -> Self {
        self.guards.extend(guards);
        self
    }

    /// Add a callback run before the transition.
    pub fn before(mut self, callback: impl Into<String>) -> Self {
        self.before.push(callback.into());
        self
    }

    /// Add a callback run after the transition.
    pub fn after(mut self, callback: impl Into<String>) -> Self {
        self.after.push(callback.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionSpec, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        if self.from.is_empty() {
            return Err(BuildError::MissingSource { event });
        }
        if self.to.is_empty() {
            return Err(BuildError::MissingTarget { event });
        }

        Ok(TransitionSpec {
            event,
            from: self.from,
            to: self.to,
            guards: self.guards,
            before: self.before,
            after: self.after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_missing_event() {
        let result = TransitionBuilder::new().from("a").to("b").build();

        assert_eq!(result, Err(BuildError::MissingEvent));
    }

    #[test]
    fn builder_validates_required_states() {
        let missing_to = TransitionBuilder::new().event("x").from("a").build();
        let missing_from = TransitionBuilder::new().event("x").to("a").build();

        assert_eq!(
            missing_to,
            Err(BuildError::MissingTarget {
                event: "x".to_string()
            })
        );
        assert_eq!(
            missing_from,
            Err(BuildError::MissingSource {
                event: "x".to_string()
            })
        );
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .event("z")
            .from("b")
            .to("a")
            .before("z1_before")
            .before("z2_before")
            .after("z1_after")
            .after("z2_after")
            .build()
            .unwrap();

        assert_eq!(transition.from, vec!["b"]);
        assert_eq!(transition.to, vec!["a"]);
        assert_eq!(transition.before, vec!["z1_before", "z2_before"]);
        assert_eq!(transition.after, vec!["z1_after", "z2_after"]);
    }

    #[test]
    fn guards_accept_names_and_groups() {
        let transition = TransitionBuilder::new()
            .event("many_from")
            .from_any(["a", "b"])
            .to("c")
            .guard(vec!["many_guard1", "many_guard2"])
            .guard("many_guard3")
            .build()
            .unwrap();

        assert_eq!(transition.from, vec!["a", "b"]);
        assert_eq!(
            transition.guards,
            vec![
                Guard::group([Guard::name("many_guard1"), Guard::name("many_guard2")]),
                Guard::name("many_guard3"),
            ]
        );
    }
}
