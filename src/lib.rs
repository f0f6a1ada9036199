//! Statechart rendering for declarative state machine definitions.
//!
//! A machine definition (states with enter/exit actions, transitions with
//! events, guards and before/after callbacks) is translated into a graph
//! of labelled nodes and edges, which is then handed to Graphviz to produce
//! DOT source or an image.
//!
//! # Core Concepts
//!
//! - **Definition**: anything implementing [`MachineDefinition`]
//! - **Aggregation**: transitions sharing a source/target pair become one edge
//! - **Labels**: deterministic text for every node and edge
//! - **Rendering**: [`ChartRenderer`] writes the graph through a backend
//!
//! # Example
//!
//! ```rust
//! use statechart_render::builder::{MachineBuilder, TransitionBuilder};
//! use statechart_render::core::StateSpec;
//! use statechart_render::{guards, ChartOptions, ChartRenderer};
//!
//! let machine = MachineBuilder::new("claim")
//!     .state(StateSpec::new("a").on_enter(["a enter"]))
//!     .state(StateSpec::new("b"))
//!     .state(StateSpec::new("c"))
//!     .initial("a")
//!     .terminal("c")
//!     .transition(
//!         TransitionBuilder::new()
//!             .event("y")
//!             .from("a")
//!             .to("b")
//!             .before("y_before")
//!             .after("y_after"),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .event("x")
//!             .from("b")
//!             .to("c")
//!             .guards(guards![xbc1_guard, xbc2_guard]),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let renderer = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();
//! let graph = renderer.graph();
//!
//! assert_eq!(
//!     graph.state_edge("a", "b").and_then(|e| e.label.as_deref()),
//!     Some("y  / y_before y_after")
//! );
//! assert_eq!(
//!     graph.state_edge("b", "c").and_then(|e| e.label.as_deref()),
//!     Some("x [xbc1_guard, xbc2_guard]")
//! );
//! ```

pub mod builder;
pub mod core;
pub mod graph;
pub mod label;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Guard, MachineDefinition, MachineSpec, StateSpec, TransitionSpec};
pub use graph::{Graph, GraphError, NodeId};
pub use options::ChartOptions;
pub use render::{ChartRenderer, GraphvizBackend, OutputFormat, RenderBackend, RenderError};
