//! Core definition types.
//!
//! This module contains the plain data a chart is drawn from:
//! - State specifications with their enter/exit actions
//! - Transition specifications with guards and callbacks
//! - The `MachineDefinition` trait that providers implement
//!
//! Nothing here performs I/O or rendering.

mod definition;
mod guard;
mod state;
mod transition;

pub use definition::{MachineDefinition, MachineSpec};
pub use guard::Guard;
pub use state::StateSpec;
pub use transition::TransitionSpec;
