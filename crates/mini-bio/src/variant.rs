//! Presentation variant for rendering a MiniBio.
//!
//! The variant is not part of the record itself. Rendering code pairs a [`MiniBioType`] with a
//! [`crate::MiniBio`] to choose between a full-width hero layout and a compact card.

use crate::MiniBioError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Layout variant used to render a MiniBio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiniBioType {
    /// Full-width banner layout.
    Hero,
    /// Compact card layout.
    Card,
}

impl MiniBioType {
    /// Every recognised variant, in declaration order.
    pub const ALL: &'static [MiniBioType] = &[MiniBioType::Hero, MiniBioType::Card];

    /// Wire tag for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            MiniBioType::Hero => "hero",
            MiniBioType::Card => "card",
        }
    }

    /// Parse from a wire tag. Matching is exact; `"Hero"` is not `hero`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hero" => Some(MiniBioType::Hero),
            "card" => Some(MiniBioType::Card),
            _ => None,
        }
    }
}

impl FromStr for MiniBioType {
    type Err = MiniBioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| MiniBioError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for MiniBioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
