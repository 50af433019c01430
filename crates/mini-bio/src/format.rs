//! Text formats a MiniBio document can be read from or written to.

use crate::MiniBioError;
use std::{fmt, path::Path, str::FromStr};

/// Document text format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML mapping (the default for hand-authored content files).
    #[default]
    Yaml,
    /// JSON object, as returned by content APIs.
    Json,
}

impl DocumentFormat {
    /// Guess the format from a file extension (`yaml`, `yml`, `json`; case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = MiniBioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(MiniBioError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
