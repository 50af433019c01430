//! MiniBio content model.
//!
//! A MiniBio is a short profile block (a person's card or hero banner) authored in a content
//! management system and delivered as a YAML or JSON mapping. This crate provides:
//! - the domain-level [`MiniBio`] record and its closed enumerations ([`Language`],
//!   [`MiniBioType`])
//! - strict parsing and rendering through an internal wire model ([`MiniBioDocument`])
//! - a total conformance checker that lists every violation instead of stopping at the first
//!   ([`conformance`])
//!
//! Media assets are owned by the content client; records hold a [`content_media::Media`] by
//! value and never interpret it.

pub mod conformance;
pub mod format;
pub mod language;
pub mod record;
pub mod variant;

// Re-export facades
pub use format::DocumentFormat;
pub use record::{MiniBio, MiniBioDocument};

// Re-export public domain-level types
pub use content_media::Media;
pub use conformance::{Conformance, Violation, ViolationKind};
pub use language::Language;
pub use variant::MiniBioType;

/// Errors returned by the `mini-bio` crate.
#[derive(Debug, thiserror::Error)]
pub enum MiniBioError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),

    #[error("unknown MiniBio variant: {0:?}")]
    UnknownVariant(String),

    #[error("unknown document format: {0:?}")]
    UnknownFormat(String),
}

/// Type alias for Results that can fail with a [`MiniBioError`].
pub type MiniBioResult<T> = Result<T, MiniBioError>;
