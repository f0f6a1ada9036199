//! Chart rendering: the facade that turns a definition into a graph and
//! hands it to a backend.
//!
//! # Example
//!
//! ```rust
//! use statechart_render::builder::{simple_transition, MachineBuilder};
//! use statechart_render::core::StateSpec;
//! use statechart_render::render::{ChartRenderer, OutputFormat};
//! use statechart_render::ChartOptions;
//!
//! let machine = MachineBuilder::new("door")
//!     .state(StateSpec::new("open"))
//!     .state(StateSpec::new("closed").on_enter(["lock"]))
//!     .initial("open")
//!     .terminal("closed")
//!     .add_transition(simple_transition("close", "open", "closed"))
//!     .build()
//!     .unwrap();
//!
//! let renderer = ChartRenderer::new(&machine, ChartOptions::default()).unwrap();
//! assert_eq!(renderer.graph().node_count(), 4);
//!
//! let dir = tempfile::tempdir().unwrap();
//! renderer.save(dir.path().join("door.dot"), OutputFormat::Dot).unwrap();
//! ```

mod backend;
mod dot;
mod error;
mod format;

pub use backend::{GraphvizBackend, RenderBackend};
pub use dot::to_dot;
pub use error::RenderError;
pub use format::OutputFormat;

use crate::core::MachineDefinition;
use crate::graph::{aggregate, build, Graph, GraphResult, NodeId};
use crate::options::ChartOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds a chart graph once and writes it out on request.
///
/// The graph is read-only after construction, so a renderer can be shared
/// between threads and saved concurrently.
#[derive(Clone)]
pub struct ChartRenderer {
    graph: Graph,
    options: ChartOptions,
    backend: Arc<dyn RenderBackend>,
}

impl ChartRenderer {
    /// Build the chart for `definition` using the Graphviz backend.
    pub fn new<D: MachineDefinition>(definition: D, options: ChartOptions) -> GraphResult<Self> {
        Self::with_backend(definition, options, GraphvizBackend::new())
    }

    /// Build the chart for `definition` using a custom backend.
    pub fn with_backend<D, B>(definition: D, options: ChartOptions, backend: B) -> GraphResult<Self>
    where
        D: MachineDefinition,
        B: RenderBackend + 'static,
    {
        let transitions = definition.transitions();
        let edges = aggregate(&transitions)?;
        let graph = build(
            definition.name(),
            &definition.states(),
            &edges,
            &definition.initial_states(),
            &definition.terminal_states(),
            &options,
        )?;

        Ok(Self {
            graph,
            options,
            backend: Arc::new(backend),
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn start_node(&self) -> NodeId {
        self.graph.start_node()
    }

    pub fn end_node(&self) -> Option<NodeId> {
        self.graph.end_node()
    }

    /// DOT source of the chart.
    pub fn to_dot(&self) -> String {
        to_dot(&self.graph, self.options.directed)
    }

    /// Write the chart to `path` in `format`.
    ///
    /// The path is used as given; no extension is added. On failure any
    /// existing file at `path` is left untouched.
    pub fn save(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<(), RenderError> {
        let path = path.as_ref();

        if !self.backend.supports(format) {
            return Err(RenderError::UnsupportedFormat(format));
        }

        match self.backend.render(&self.graph, &self.options, format, path) {
            Ok(()) => {
                info!(
                    graph = self.graph.name(),
                    %format,
                    path = %path.display(),
                    "saved chart"
                );
                Ok(())
            }
            Err(error) => {
                warn!(graph = self.graph.name(), %format, %error, "failed to save chart");
                Err(error)
            }
        }
    }

    /// Like [`save`](Self::save), with the format given by name.
    pub fn save_as(&self, path: impl AsRef<Path>, format: &str) -> Result<(), RenderError> {
        self.save(path, format.parse()?)
    }
}

impl std::fmt::Debug for ChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRenderer")
            .field("graph", &self.graph)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
