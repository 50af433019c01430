//! CLI runtime configuration.
//!
//! Resolved once at startup and passed into commands, so nothing reads process-wide
//! environment variables while documents are being processed.

use anyhow::Context;
use mini_bio::DocumentFormat;

/// Format assumed for stdin and for paths without a recognised extension.
pub const DEFAULT_FORMAT_VAR: &str = "MINIBIO_DEFAULT_FORMAT";

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub(crate) default_format: DocumentFormat,
}

impl CliConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let default_format = match lookup(DEFAULT_FORMAT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<DocumentFormat>()
                .with_context(|| format!("{DEFAULT_FORMAT_VAR} must be 'yaml' or 'json'"))?,
            _ => DocumentFormat::default(),
        };

        Ok(Self { default_format })
    }

    pub fn default_format(&self) -> DocumentFormat {
        self.default_format
    }
}
