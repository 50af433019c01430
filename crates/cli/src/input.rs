//! Reading documents from files or stdin.

use crate::config::CliConfig;
use anyhow::Context;
use mini_bio::DocumentFormat;
use std::path::Path;

/// Path argument that means "read stdin".
pub const STDIN: &str = "-";

/// A document read into memory along with the format it should be parsed as.
#[derive(Clone, Debug)]
pub struct Input {
    /// Path as given on the command line, used in messages.
    pub label: String,
    pub text: String,
    pub format: DocumentFormat,
}

/// Pick a format: explicit flag, then file extension, then configured default.
pub fn resolve_format(
    path: &Path,
    explicit: Option<DocumentFormat>,
    config: &CliConfig,
) -> DocumentFormat {
    explicit
        .or_else(|| DocumentFormat::from_path(path))
        .unwrap_or_else(|| config.default_format())
}

pub fn read_input(
    path: &Path,
    explicit: Option<DocumentFormat>,
    config: &CliConfig,
) -> anyhow::Result<Input> {
    let label = path.display().to_string();
    let text = if path.as_os_str() == STDIN {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {label}"))?
    };
    let format = resolve_format(path, explicit, config);
    tracing::debug!(%label, %format, bytes = text.len(), "read document");

    Ok(Input {
        label,
        text,
        format,
    })
}
