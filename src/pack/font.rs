//! Font definition files and their provider lists.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::key::ResourceKey;

/// One contribution to a font's rendering definition.
///
/// The generator synthesizes `bitmap` and `space` providers from the glyph
/// registry; any other provider type encountered in an imported pack
/// (`ttf`, `reference`, `unihex`, ...) is carried through as raw JSON so
/// reads stay lossless.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FontProvider {
    /// A glyph bitmap: a texture sliced into rows of characters.
    Bitmap(BitmapProvider),

    /// Per-character advance widths without a texture.
    Space(SpaceProvider),

    /// Any provider type this crate does not model structurally.
    Other(Value),
}

impl FontProvider {
    /// Shorthand for a bitmap provider.
    pub fn bitmap(
        file: impl Into<String>,
        height: i32,
        ascent: i32,
        chars: Vec<String>,
    ) -> Self {
        Self::Bitmap(BitmapProvider::new(file, height, ascent, chars))
    }
}

impl<'de> Deserialize<'de> for FontProvider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value.get("type").and_then(Value::as_str) {
            Some("bitmap") => serde_json::from_value(value)
                .map(FontProvider::Bitmap)
                .map_err(D::Error::custom),
            Some("space") => serde_json::from_value(value)
                .map(FontProvider::Space)
                .map_err(D::Error::custom),
            _ => Ok(FontProvider::Other(value)),
        }
    }
}

/// A `bitmap` font provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitmapProvider {
    #[serde(rename = "type")]
    kind: String,

    /// Texture file reference, e.g. `packmill:font/glyphs.png`.
    pub file: String,

    /// Glyph cell height in pixels.
    #[serde(default = "default_height")]
    pub height: i32,

    /// Distance from the glyph top to the text baseline.
    pub ascent: i32,

    /// Rows of characters mapped onto the texture grid.
    pub chars: Vec<String>,
}

fn default_height() -> i32 {
    8
}

impl BitmapProvider {
    /// Create a bitmap provider.
    pub fn new(file: impl Into<String>, height: i32, ascent: i32, chars: Vec<String>) -> Self {
        Self {
            kind: "bitmap".to_string(),
            file: file.into(),
            height,
            ascent,
            chars,
        }
    }
}

/// A `space` font provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceProvider {
    #[serde(rename = "type")]
    kind: String,

    /// Advance width per character.
    pub advances: Map<String, Value>,
}

impl SpaceProvider {
    /// Create a space provider from (character, advance) pairs.
    pub fn new(advances: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            kind: "space".to_string(),
            advances: advances
                .into_iter()
                .map(|(c, w)| (c, Value::from(w)))
                .collect(),
        }
    }
}

/// On-disk shape of a font file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct FontFile {
    #[serde(flatten)]
    extra: Map<String, Value>,

    #[serde(default)]
    providers: Vec<FontProvider>,
}

/// A font entry in a resource pack.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Resource key of this font (file path without `font/` or `.json`).
    pub key: ResourceKey,

    /// Ordered provider list; earlier providers win for a shared codepoint.
    pub providers: Vec<FontProvider>,

    /// Any fields other than `providers`.
    pub extra: Map<String, Value>,
}

impl Font {
    /// Create a font with the given provider list.
    pub fn new(key: ResourceKey, providers: Vec<FontProvider>) -> Self {
        Self {
            key,
            providers,
            extra: Map::new(),
        }
    }

    /// Parse a font from raw JSON bytes.
    pub fn from_json(key: ResourceKey, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let file: FontFile = serde_json::from_slice(bytes)?;
        Ok(Self {
            key,
            providers: file.providers,
            extra: file.extra,
        })
    }

    /// Serialize back to font-file JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&FontFile {
            extra: self.extra.clone(),
            providers: self.providers.clone(),
        })
    }
}
