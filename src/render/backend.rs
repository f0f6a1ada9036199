//! Rendering backends that persist chart graphs.

use super::dot::to_dot;
use super::error::RenderError;
use super::format::OutputFormat;
use crate::graph::Graph;
use crate::options::ChartOptions;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Something that can write a chart graph to a file in a given format.
pub trait RenderBackend: Send + Sync {
    /// Whether this backend can produce the format.
    fn supports(&self, format: OutputFormat) -> bool;

    /// Write `graph` to `path` in `format`.
    ///
    /// Implementations must leave an existing file at `path` untouched
    /// when they fail.
    fn render(
        &self,
        graph: &Graph,
        options: &ChartOptions,
        format: OutputFormat,
        path: &Path,
    ) -> Result<(), RenderError>;
}

/// Backend driving the Graphviz `dot` executable.
///
/// DOT output is written directly; image formats are produced by piping the
/// DOT source through `dot -T<format>`.
#[derive(Clone, Debug)]
pub struct GraphvizBackend {
    command: String,
}

impl Default for GraphvizBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizBackend {
    /// Backend that runs `dot` from `PATH`.
    pub fn new() -> Self {
        Self {
            command: "dot".to_string(),
        }
    }

    /// Use a specific Graphviz executable.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn run_graphviz(&self, source: &str, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
        debug!(command = %self.command, %format, "running graphviz");

        let mut child = Command::new(&self.command)
            .arg(format!("-T{}", format.graphviz_name()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::BackendUnavailable {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "graphviz stdin unavailable")
        })?;
        let input = source.to_owned();
        // Feed stdin from another thread so a full stdout pipe cannot deadlock us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command = %self.command, status = %output.status, %stderr, "graphviz failed");
            return Err(RenderError::BackendFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        writer
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "graphviz stdin writer panicked"))??;

        Ok(output.stdout)
    }
}

impl RenderBackend for GraphvizBackend {
    fn supports(&self, _format: OutputFormat) -> bool {
        true
    }

    fn render(
        &self,
        graph: &Graph,
        options: &ChartOptions,
        format: OutputFormat,
        path: &Path,
    ) -> Result<(), RenderError> {
        let source = to_dot(graph, options.directed);

        let bytes = if format.is_source() {
            source.into_bytes()
        } else {
            self.run_graphviz(&source, format)?
        };

        write_atomically(path, &bytes)
    }
}

/// Write through a temporary file in the target directory, then rename it
/// into place. A failure leaves any existing file at `path` untouched.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| RenderError::Io(e.error))?;

    Ok(())
}
