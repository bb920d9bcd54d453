//! Texture atlas definition files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::key::ResourceKey;

/// On-disk shape of an atlas file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct AtlasFile {
    #[serde(flatten)]
    extra: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sources: Vec<Value>,
}

/// An atlas entry in a resource pack.
///
/// Sources are opaque to the merge rules: each is one contribution
/// (`directory`, `single`, `paletted_permutations`, ...) and their structure
/// belongs to the client, not to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Atlas {
    /// Resource key of this atlas (file path without `atlases/` or `.json`).
    pub key: ResourceKey,

    /// Ordered source list.
    pub sources: Vec<Value>,

    /// Any fields other than `sources`.
    pub extra: Map<String, Value>,
}

impl Atlas {
    /// Create an atlas with the given source list.
    pub fn new(key: ResourceKey, sources: Vec<Value>) -> Self {
        Self {
            key,
            sources,
            extra: Map::new(),
        }
    }

    /// Parse an atlas from raw JSON bytes.
    pub fn from_json(key: ResourceKey, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let file: AtlasFile = serde_json::from_slice(bytes)?;
        Ok(Self {
            key,
            sources: file.sources,
            extra: file.extra,
        })
    }

    /// Serialize back to atlas-file JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&AtlasFile {
            extra: self.extra.clone(),
            sources: self.sources.clone(),
        })
    }
}
