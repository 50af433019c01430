//! Media asset references as delivered by the content client.
//!
//! A [`Media`] value is owned and validated by the content-delivery service that hands it out.
//! Consumers in this workspace only carry it around: the one structural guarantee made here is
//! that a media reference is a mapping of string keys to structured values. Every key and nested
//! value is preserved as-is, so a reference survives a render/parse cycle unchanged.

use serde_json::{Map, Value};

/// Errors that can occur when building a media reference.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The supplied value was a scalar or a sequence instead of a mapping
    #[error("media reference must be a mapping")]
    NotAMapping,
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Opaque reference to an externally managed media asset.
///
/// Equality is structural over the whole mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media(Map<String, Value>);

impl Media {
    /// Creates a media reference from an untyped value.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::NotAMapping`] if `value` is not an object.
    pub fn from_value(value: Value) -> MediaResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(MediaError::NotAMapping),
        }
    }

    /// Wraps an already-built mapping.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Looks up a top-level attribute of the asset.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level attribute names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts back into an untyped value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Media {
    type Error = MediaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Media> for Value {
    fn from(media: Media) -> Self {
        media.into_value()
    }
}

impl serde::Serialize for Media {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Media {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Media::from_value(value).map_err(serde::de::Error::custom)
    }
}
