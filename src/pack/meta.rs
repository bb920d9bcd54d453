//! Pack metadata (`pack.mcmeta`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed contents of a `pack.mcmeta` file.
///
/// Only the `pack` section is modelled; any sibling sections (`filter`,
/// `overlays`, ...) are retained verbatim in `extra` so a read/write cycle is
/// lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackMeta {
    /// The `pack` section: format version and description.
    pub pack: PackSection,

    /// Sections other than `pack`, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `pack` section of `pack.mcmeta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSection {
    /// Target pack format version.
    pub pack_format: u32,

    /// Pack description; plain string or rich text component.
    #[serde(default)]
    pub description: Value,
}

impl PackMeta {
    /// Create metadata with a plain-string description.
    pub fn new(pack_format: u32, description: impl Into<String>) -> Self {
        Self {
            pack: PackSection {
                pack_format,
                description: Value::String(description.into()),
            },
            extra: Map::new(),
        }
    }

    /// Parse from raw `pack.mcmeta` bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize back to `pack.mcmeta` bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
