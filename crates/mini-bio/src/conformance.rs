//! Shape conformance checks over untyped documents.
//!
//! [`crate::MiniBioDocument`] stops at the first problem. The checks here walk the whole
//! document and report every violation, which is what an authoring tool or a content lint wants
//! to show. They never fail: malformed text becomes a [`ViolationKind::Malformed`] entry.
//!
//! A document conforms here exactly when strict parsing of the same document succeeds.

use crate::{DocumentFormat, Language, MiniBioType};
use serde_json::Value;
use std::fmt;

/// Field name used for violations that concern the document as a whole.
pub const ROOT: &str = "<root>";

/// Wire keys of a MiniBio, in declaration order.
pub const MINI_BIO_FIELDS: [&str; 8] = [
    "id",
    "language",
    "title",
    "name",
    "role",
    "description",
    "image",
    "imageAlt",
];

/// What is wrong with a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// Text could not be parsed into a document tree at all.
    Malformed(String),
    /// The document is not a mapping.
    NotAMapping,
    /// A mandatory field is absent.
    MissingField,
    /// The field is present with the wrong type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// `language` is a string outside the recognised set.
    UnknownLanguage(String),
    /// A variant tag outside `hero`/`card`.
    UnknownVariant(String),
    /// A key that is not part of the record.
    UnknownField,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Malformed(msg) => write!(f, "malformed document: {msg}"),
            ViolationKind::NotAMapping => f.write_str("expected a mapping"),
            ViolationKind::MissingField => f.write_str("missing mandatory field"),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ViolationKind::UnknownLanguage(code) => {
                let known: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
                write!(f, "unknown language {code:?} (expected one of {known:?})")
            }
            ViolationKind::UnknownVariant(tag) => {
                let known: Vec<&str> = MiniBioType::ALL.iter().map(|t| t.as_str()).collect();
                write!(f, "unknown variant {tag:?} (expected one of {known:?})")
            }
            ViolationKind::UnknownField => f.write_str("unknown field"),
        }
    }
}

/// One problem found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Wire key the problem is attached to, or [`ROOT`].
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Outcome of a conformance check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conformance {
    violations: Vec<Violation>,
}

impl Conformance {
    pub fn is_conforming(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Violations attached to one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conforming() {
            return f.write_str("ok");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Check a document tree against the MiniBio shape.
///
/// Violations are listed in declared field order, followed by unknown keys in sorted order.
pub fn check_mini_bio(document: &Value) -> Conformance {
    let Some(map) = document.as_object() else {
        return Conformance {
            violations: vec![Violation::new(ROOT, ViolationKind::NotAMapping)],
        };
    };

    let mut violations = Vec::new();

    for field in MINI_BIO_FIELDS {
        let Some(value) = map.get(field) else {
            violations.push(Violation::new(field, ViolationKind::MissingField));
            continue;
        };

        match field {
            "image" => {
                if !value.is_object() {
                    violations.push(Violation::new(
                        field,
                        ViolationKind::WrongType {
                            expected: "mapping",
                            found: type_name(value),
                        },
                    ));
                }
            }
            "language" => match value.as_str() {
                Some(code) if Language::from_code(code).is_some() => {}
                Some(code) => violations.push(Violation::new(
                    field,
                    ViolationKind::UnknownLanguage(code.to_string()),
                )),
                None => violations.push(expected_string(field, value)),
            },
            _ => {
                if !value.is_string() {
                    violations.push(expected_string(field, value));
                }
            }
        }
    }

    let mut unknown: Vec<&String> = map
        .keys()
        .filter(|key| !MINI_BIO_FIELDS.contains(&key.as_str()))
        .collect();
    unknown.sort();
    violations.extend(
        unknown
            .into_iter()
            .map(|key| Violation::new(key.as_str(), ViolationKind::UnknownField)),
    );

    Conformance { violations }
}

/// Check a bare variant tag.
pub fn check_variant(tag: &Value) -> Conformance {
    let violation = match tag.as_str() {
        Some(s) if MiniBioType::from_tag(s).is_some() => None,
        Some(s) => Some(Violation::new(ROOT, ViolationKind::UnknownVariant(s.to_string()))),
        None => Some(expected_string(ROOT, tag)),
    };

    Conformance {
        violations: violation.into_iter().collect(),
    }
}

/// Parse YAML text and check it as a MiniBio.
pub fn check_yaml_str(text: &str) -> Conformance {
    match serde_yaml::from_str::<Value>(text) {
        Ok(document) => check_mini_bio(&document),
        Err(err) => malformed(err),
    }
}

/// Parse JSON text and check it as a MiniBio.
pub fn check_json_str(text: &str) -> Conformance {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => check_mini_bio(&document),
        Err(err) => malformed(err),
    }
}

/// Parse text in the given format and check it as a MiniBio.
pub fn check_str(text: &str, format: DocumentFormat) -> Conformance {
    match format {
        DocumentFormat::Yaml => check_yaml_str(text),
        DocumentFormat::Json => check_json_str(text),
    }
}

fn malformed(err: impl fmt::Display) -> Conformance {
    tracing::debug!(error = %err, "document could not be parsed");
    Conformance {
        violations: vec![Violation::new(
            ROOT,
            ViolationKind::Malformed(err.to_string()),
        )],
    }
}

fn expected_string(field: &str, value: &Value) -> Violation {
    Violation::new(
        field,
        ViolationKind::WrongType {
            expected: "string",
            found: type_name(value),
        },
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
