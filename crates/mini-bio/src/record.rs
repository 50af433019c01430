//! MiniBio record and its wire model.
//!
//! Responsibilities:
//! - Define the public domain-level [`MiniBio`] record
//! - Define a strict wire model for YAML and JSON documents
//! - Translate between the two, rejecting unknown keys, missing fields and unrecognised
//!   language codes
//!
//! Notes:
//! - Records are read-only projections of CMS content; nothing here mutates or persists them
//! - `id` uniqueness is the content system's concern, not checked here

use crate::{DocumentFormat, Language, MiniBioError, MiniBioResult};
use content_media::Media;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Public domain-level types
// ============================================================================

/// A short biography block: one person's card or hero banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiniBio {
    /// Identifier assigned by the content system. Opaque.
    pub id: String,

    /// Language the block is authored in.
    pub language: Language,

    /// Display title.
    pub title: String,

    /// Subject's name.
    pub name: String,

    /// Subject's role or position.
    pub role: String,

    /// Longer biography text.
    pub description: String,

    /// Portrait or banner image. Owned by the content client.
    pub image: Media,

    /// Accessibility text for `image`.
    pub image_alt: String,
}

// ============================================================================
// Public MiniBioDocument operations
// ============================================================================

/// MiniBio document operations.
///
/// This is a zero-sized type used for namespacing parse/render operations.
/// All methods are associated functions.
pub struct MiniBioDocument;

impl MiniBioDocument {
    /// Parse a MiniBio from YAML text.
    ///
    /// The text is read into a document tree first, then translated with `serde_path_to_error`
    /// to surface a best-effort "path" (e.g. `image`) to the failing field when the document
    /// does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`MiniBioError`] if:
    /// - the text is not valid YAML,
    /// - the document is not a mapping with all eight fields,
    /// - any field has an unexpected type,
    /// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`),
    /// - `language` is not a recognised code.
    pub fn parse_yaml(yaml_text: &str) -> MiniBioResult<MiniBio> {
        Self::parse(yaml_text, DocumentFormat::Yaml)
    }

    /// Parse a MiniBio from JSON text, as returned by content APIs.
    ///
    /// # Errors
    ///
    /// Same as [`MiniBioDocument::parse_yaml`], with [`MiniBioError::InvalidJson`] for text
    /// that is not a single JSON value.
    pub fn parse_json(json_text: &str) -> MiniBioResult<MiniBio> {
        Self::parse(json_text, DocumentFormat::Json)
    }

    /// Parse a MiniBio in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> MiniBioResult<MiniBio> {
        let bio = Self::from_value(read_document(text, format)?)?;
        tracing::debug!(id = %bio.id, %format, "parsed MiniBio");
        Ok(bio)
    }

    /// Parse a sequence of MiniBio records, as delivered by a content listing.
    ///
    /// Failures name the offending entry by index (e.g. `[2]`).
    pub fn parse_many(text: &str, format: DocumentFormat) -> MiniBioResult<Vec<MiniBio>> {
        let Value::Array(entries) = read_document(text, format)? else {
            return Err(MiniBioError::Translation(
                "MiniBio list schema mismatch at <root>: expected a sequence".into(),
            ));
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Self::from_value(entry).map_err(|err| {
                    MiniBioError::Translation(format!("MiniBio list entry [{index}]: {err}"))
                })
            })
            .collect()
    }

    /// Build a MiniBio from an already-parsed document tree.
    ///
    /// The tree must be a mapping; positional (sequence) forms are rejected.
    pub fn from_value(value: Value) -> MiniBioResult<MiniBio> {
        if !value.is_object() {
            return Err(MiniBioError::Translation(
                "MiniBio schema mismatch at <root>: expected a mapping".into(),
            ));
        }

        let wire: MiniBioWire = serde_path_to_error::deserialize(value)
            .map_err(|err| schema_mismatch("MiniBio", err))?;

        wire_to_domain(wire)
    }

    /// Convert a MiniBio into a generic document tree.
    pub fn to_value(bio: &MiniBio) -> MiniBioResult<Value> {
        Ok(serde_json::to_value(domain_to_wire(bio))?)
    }

    /// Render a MiniBio as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`MiniBioError::InvalidYaml`] if serialisation fails.
    pub fn render_yaml(bio: &MiniBio) -> MiniBioResult<String> {
        let wire = domain_to_wire(bio);
        let yaml = serde_yaml::to_string(&wire)?;
        tracing::debug!(id = %bio.id, "rendered MiniBio as YAML");
        Ok(yaml)
    }

    /// Render a MiniBio as pretty-printed JSON text.
    pub fn render_json(bio: &MiniBio) -> MiniBioResult<String> {
        let wire = domain_to_wire(bio);
        let json = serde_json::to_string_pretty(&wire)?;
        tracing::debug!(id = %bio.id, "rendered MiniBio as JSON");
        Ok(json)
    }

    /// Render a MiniBio in the given format.
    pub fn render(bio: &MiniBio, format: DocumentFormat) -> MiniBioResult<String> {
        match format {
            DocumentFormat::Yaml => Self::render_yaml(bio),
            DocumentFormat::Json => Self::render_json(bio),
        }
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a MiniBio document.
///
/// Key names follow the content API (`imageAlt` is camelCase there).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct MiniBioWire {
    pub id: String,
    pub language: String,
    pub title: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image: Media,
    #[serde(rename = "imageAlt")]
    pub image_alt: String,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn read_document(text: &str, format: DocumentFormat) -> MiniBioResult<Value> {
    Ok(match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    })
}

/// Turn a path-tracking deserialisation failure into a translation error naming the field.
fn schema_mismatch<E: std::fmt::Display>(
    what: &str,
    err: serde_path_to_error::Error<E>,
) -> MiniBioError {
    let path = if err.path().iter().next().is_none() {
        "<root>".to_string()
    } else {
        err.path().to_string()
    };
    let source = err.into_inner();
    tracing::debug!(%path, "rejected {what} document");
    MiniBioError::Translation(format!("{what} schema mismatch at {path}: {source}"))
}

fn wire_to_domain(wire: MiniBioWire) -> MiniBioResult<MiniBio> {
    let language = wire.language.parse::<Language>()?;

    Ok(MiniBio {
        id: wire.id,
        language,
        title: wire.title,
        name: wire.name,
        role: wire.role,
        description: wire.description,
        image: wire.image,
        image_alt: wire.image_alt,
    })
}

fn domain_to_wire(bio: &MiniBio) -> MiniBioWire {
    MiniBioWire {
        id: bio.id.clone(),
        language: bio.language.as_str().to_string(),
        title: bio.title.clone(),
        name: bio.name.clone(),
        role: bio.role.clone(),
        description: bio.description.clone(),
        image: bio.image.clone(),
        image_alt: bio.image_alt.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JANE_YAML: &str = r#"id: abc123
language: en
title: Lead Engineer
name: Jane Doe
role: CTO
description: Jane leads the platform team and mentors new engineers.
image:
  id: img-42
  url: https://cdn.example.com/jane.jpg
  size: 20480
  dimensions:
    width: 640
    height: 480
imageAlt: Jane smiling
"#;

    #[test]
    fn parses_sample_yaml() {
        let bio = MiniBioDocument::parse_yaml(JANE_YAML).expect("parse yaml");

        assert_eq!(bio.id, "abc123");
        assert_eq!(bio.language, Language::En);
        assert_eq!(bio.title, "Lead Engineer");
        assert_eq!(bio.name, "Jane Doe");
        assert_eq!(bio.role, "CTO");
        assert_eq!(bio.image_alt, "Jane smiling");
        assert_eq!(bio.image.get("url"), Some(&json!("https://cdn.example.com/jane.jpg")));
    }

    #[test]
    fn round_trips_sample_yaml() {
        let bio = MiniBioDocument::parse_yaml(JANE_YAML).expect("parse yaml");
        let output = MiniBioDocument::render_yaml(&bio).expect("render yaml");
        let reparsed = MiniBioDocument::parse_yaml(&output).expect("reparse yaml");
        assert_eq!(bio, reparsed);
    }

    #[test]
    fn round_trips_through_json() {
        let bio = MiniBioDocument::parse_yaml(JANE_YAML).expect("parse yaml");
        let json = MiniBioDocument::render_json(&bio).expect("render json");
        assert!(json.contains("\"imageAlt\""));

        let reparsed = MiniBioDocument::parse_json(&json).expect("reparse json");
        assert_eq!(bio, reparsed);
        assert_eq!(bio.image, reparsed.image);
    }

    #[test]
    fn round_trips_through_value() {
        let bio = MiniBioDocument::parse_yaml(JANE_YAML).expect("parse yaml");
        let value = MiniBioDocument::to_value(&bio).expect("to value");
        assert_eq!(value["language"], json!("en"));
        assert_eq!(value["image"]["dimensions"]["width"], json!(640));

        let reparsed = MiniBioDocument::from_value(value).expect("from value");
        assert_eq!(bio, reparsed);
    }

    #[test]
    fn rejects_unknown_language() {
        let input = JANE_YAML.replace("language: en", "language: fr");
        let err = MiniBioDocument::parse_yaml(&input).expect_err("should reject fr");
        match err {
            MiniBioError::UnknownLanguage(code) => assert_eq!(code, "fr"),
            other => panic!("expected UnknownLanguage error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_image_alt() {
        let input = JANE_YAML.replace("imageAlt: Jane smiling\n", "");
        let err = MiniBioDocument::parse_yaml(&input).expect_err("should reject missing field");
        match err {
            MiniBioError::Translation(msg) => {
                assert!(msg.contains("imageAlt"), "message: {msg}");
                assert!(msg.contains("missing field"), "message: {msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = format!("{JANE_YAML}unexpected_key: should_fail\n");
        let err = MiniBioDocument::parse_yaml(&input).expect_err("should reject unknown key");
        match err {
            MiniBioError::Translation(msg) => assert!(msg.contains("unexpected_key")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_wrong_types() {
        let input = JANE_YAML.replace("role: CTO", "role:\n  - CTO\n  - Founder");
        let err = MiniBioDocument::parse_yaml(&input).expect_err("should reject wrong type");
        match err {
            MiniBioError::Translation(msg) => assert!(msg.contains("role"), "message: {msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_scalar_image() {
        let input = r#"{
  "id": "abc123",
  "language": "en",
  "title": "Lead Engineer",
  "name": "Jane Doe",
  "role": "CTO",
  "description": "...",
  "image": "https://cdn.example.com/jane.jpg",
  "imageAlt": "Jane smiling"
}"#;
        let err = MiniBioDocument::parse_json(input).expect_err("should reject scalar image");
        match err {
            MiniBioError::Translation(msg) => {
                assert!(msg.contains("image"), "message: {msg}");
                assert!(msg.contains("mapping"), "message: {msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn json_rejects_trailing_characters() {
        let bio = MiniBioDocument::parse_yaml(JANE_YAML).expect("parse yaml");
        let json = MiniBioDocument::render_json(&bio).expect("render json");
        let err = MiniBioDocument::parse_json(&format!("{json} extra"))
            .expect_err("should reject trailing data");
        assert!(matches!(err, MiniBioError::InvalidJson(_)));
    }

    #[test]
    fn rejects_positional_form() {
        let input = r#"["abc123", "en", "t", "n", "r", "d", {}, "alt"]"#;
        let err = MiniBioDocument::parse_json(input).expect_err("should reject sequence");
        match err {
            MiniBioError::Translation(msg) => assert!(msg.contains("expected a mapping")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_yaml_syntax() {
        let err = MiniBioDocument::parse_yaml("id: [unterminated").expect_err("should fail");
        assert!(matches!(err, MiniBioError::InvalidYaml(_)));
    }

    #[test]
    fn free_text_fields_may_be_empty() {
        let input = JANE_YAML.replace("title: Lead Engineer", "title: \"\"");
        let bio = MiniBioDocument::parse_yaml(&input).expect("empty title is free text");
        assert_eq!(bio.title, "");
    }

    #[test]
    fn parses_list_of_records() {
        let second = JANE_YAML
            .replace("id: abc123", "id: def456")
            .replace("name: Jane Doe", "name: John Roe");
        let input = json!([
            serde_yaml::from_str::<Value>(JANE_YAML).expect("yaml value"),
            serde_yaml::from_str::<Value>(&second).expect("yaml value"),
        ])
        .to_string();

        let bios = MiniBioDocument::parse_many(&input, DocumentFormat::Json).expect("parse list");
        assert_eq!(bios.len(), 2);
        assert_eq!(bios[0].id, "abc123");
        assert_eq!(bios[1].name, "John Roe");
    }

    #[test]
    fn list_errors_name_the_entry() {
        let indented: String = JANE_YAML
            .lines()
            .map(|line| format!("  {line}\n"))
            .collect();
        let first = indented.replacen("  id:", "- id:", 1);
        let second = first.replace("language: en", "language: fr");
        let input = format!("{first}{second}");

        let err = MiniBioDocument::parse_many(&input, DocumentFormat::Yaml)
            .expect_err("should reject second entry");
        match err {
            MiniBioError::Translation(msg) => {
                assert!(msg.contains("entry [1]"), "message: {msg}");
                assert!(msg.contains("fr"), "message: {msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_dispatches_on_format() {
        let bio = MiniBioDocument::parse(JANE_YAML, DocumentFormat::Yaml).expect("yaml");
        let json = MiniBioDocument::render(&bio, DocumentFormat::Json).expect("render");
        let reparsed = MiniBioDocument::parse(&json, DocumentFormat::Json).expect("json");
        assert_eq!(bio, reparsed);
    }
}
