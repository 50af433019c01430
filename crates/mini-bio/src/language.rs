//! Language codes a MiniBio may be authored in.

use crate::MiniBioError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Recognised content language (ISO 639-1, lowercase).
///
/// Only English is published today. New codes are added as variants; matching is exact and
/// case-sensitive, so `"EN"` or `"en-GB"` are not recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
}

impl Language {
    /// Every recognised language, in declaration order.
    pub const ALL: &'static [Language] = &[Language::En];

    /// Wire code for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
        }
    }

    /// Parse from a wire code, returning `None` for anything unrecognised.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == code)
    }
}

impl FromStr for Language {
    type Err = MiniBioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| MiniBioError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english() {
        assert_eq!("en".parse::<Language>().expect("en"), Language::En);
        assert_eq!(Language::En.to_string(), "en");
    }

    #[test]
    fn rejects_other_codes() {
        for code in ["fr", "EN", "En", "en-GB", "", " en"] {
            let err = code.parse::<Language>().expect_err("should reject");
            match err {
                MiniBioError::UnknownLanguage(got) => assert_eq!(got, code),
                other => panic!("expected UnknownLanguage error, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_language_round_trips_through_its_code() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.as_str()), Some(*language));
        }
    }

    #[test]
    fn serde_uses_wire_code() {
        let json = serde_json::to_string(&Language::En).expect("serialize");
        assert_eq!(json, "\"en\"");
        let parsed: Language = serde_json::from_str("\"en\"").expect("deserialize");
        assert_eq!(parsed, Language::En);
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }
}
