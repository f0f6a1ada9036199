//! Chart options.

use serde::{Deserialize, Serialize};

/// Options recognised when a chart is constructed.
///
/// Deserializes with every field optional:
///
/// ```rust
/// use statechart_render::ChartOptions;
///
/// let options: ChartOptions = serde_json::from_str(r#"{"hide_enter_exit": true}"#).unwrap();
///
/// assert!(options.hide_enter_exit);
/// assert!(options.directed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Drop the enter/exit rows from every state label.
    pub hide_enter_exit: bool,

    /// Draw edges with direction arrows. A rendering hint only.
    pub directed: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            hide_enter_exit: false,
            directed: true,
        }
    }
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_enter_exit(mut self, hide: bool) -> Self {
        self.hide_enter_exit = hide;
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}
