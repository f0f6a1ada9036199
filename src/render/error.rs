//! Rendering backend errors.

use super::format::OutputFormat;
use thiserror::Error;

/// Errors raised while writing a chart through a rendering backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The format name is not one of the known output formats.
    #[error("unsupported output format '{0}'")]
    UnknownFormat(String),

    /// The backend does not produce this format.
    #[error("backend cannot produce {0} output")]
    UnsupportedFormat(OutputFormat),

    /// The backend executable could not be started.
    #[error("rendering backend '{command}' is unavailable: {source}")]
    BackendUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend ran but reported failure.
    #[error("rendering backend exited with {status}: {stderr}")]
    BackendFailed { status: String, stderr: String },

    /// The output could not be written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
