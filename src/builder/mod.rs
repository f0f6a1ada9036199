//! Builder API for ergonomic machine definitions.
//!
//! This module provides fluent builders and a macro for creating
//! [`MachineSpec`](crate::core::MachineSpec) values with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::TransitionSpec;

/// Create an unguarded transition between two states.
///
/// # Example
///
/// ```
/// use statechart_render::builder::simple_transition;
///
/// let transition = simple_transition("close", "open", "closed");
///
/// assert_eq!(transition.from, vec!["open"]);
/// assert_eq!(transition.to, vec!["closed"]);
/// ```
pub fn simple_transition(
    event: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> TransitionSpec {
    TransitionSpec::new(event, [from.into()], [to.into()])
}

/// Create a transition guarded by a single named guard.
///
/// # Example
///
/// ```
/// use statechart_render::builder::guarded_transition;
/// use statechart_render::core::Guard;
///
/// let transition = guarded_transition("x", "a", "a", "xa_guard");
///
/// assert_eq!(transition.guards, vec![Guard::name("xa_guard")]);
/// ```
pub fn guarded_transition(
    event: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
    guard: impl Into<String>,
) -> TransitionSpec {
    let mut transition = simple_transition(event, from, to);
    transition.guards.push(crate::core::Guard::name(guard));
    transition
}
