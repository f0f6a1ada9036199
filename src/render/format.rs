//! Output formats understood by the rendering backends.

use super::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A requested output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Graphviz DOT source, the native graph-description format.
    Dot,
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Dot,
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Svg,
        OutputFormat::Pdf,
    ];

    /// Name passed to `dot -T`.
    pub fn graphviz_name(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Whether the format is graph source rather than a drawn image.
    pub fn is_source(self) -> bool {
        matches!(self, OutputFormat::Dot)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphviz_name())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("dot".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);
        assert_eq!("gv".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);
        assert_eq!("JPEG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert_eq!("Png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = "bmp".parse::<OutputFormat>();

        assert!(matches!(result, Err(RenderError::UnknownFormat(name)) if name == "bmp"));
    }

    #[test]
    fn display_matches_graphviz_name() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string(), format.graphviz_name());
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn only_dot_is_source() {
        assert!(OutputFormat::Dot.is_source());
        assert!(!OutputFormat::Svg.is_source());
    }
}
