//! Language (translation) files.

use serde_json::{Map, Value};

use crate::key::ResourceKey;

/// A language file: a mapping from translation id to translated text.
///
/// Translation values are kept as raw JSON values (they are strings in every
/// well-formed pack, but a malformed value in an imported pack should survive
/// the round trip rather than abort the read).
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    /// Resource key of this language file (e.g. `minecraft:en_us`).
    pub key: ResourceKey,

    /// Translations in file order.
    pub translations: Map<String, Value>,
}

impl Language {
    /// Create an empty language file.
    pub fn new(key: ResourceKey) -> Self {
        Self {
            key,
            translations: Map::new(),
        }
    }

    /// Insert a translation, replacing any existing value for the id.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.translations
            .insert(id.into(), Value::String(text.into()));
    }

    /// Parse a language file from raw JSON bytes.
    pub fn from_json(key: ResourceKey, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let translations: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self { key, translations })
    }

    /// Serialize back to language-file JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.translations)
    }
}
