//! Read-only interface to the host's glyph and item registries.
//!
//! The pack generator does not own item or glyph definitions; the host
//! (server plugin, build tool) does. This module defines the enumeration
//! interface the generator consumes:
//!
//! - [`GlyphRegistry`]: ordered glyph and glyph-bitmap definitions, from
//!   which font entries are synthesized
//! - [`ItemAssets`]: opaque model/atlas contributions; their internal
//!   algorithms belong to the host, the generator only relies on them being
//!   idempotent for unchanged registry state
//!
//! Iteration order over the registries is the host's registration order and
//! must be stable: generated provider lists inherit it, and reproducible
//! builds depend on it.

use crate::key::ResourceKey;
use crate::pack::{FontProvider, ResourcePack};

/// One glyph definition: a character (or character row) bound to a font.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Font this glyph is rendered through.
    pub font: ResourceKey,

    /// The character row this glyph occupies, usually a single private-use
    /// codepoint.
    pub chars: String,

    /// Texture file reference, e.g. `packmill:font/coin.png`.
    pub texture: String,

    /// Glyph cell height in pixels.
    pub height: i32,

    /// Distance from the glyph top to the text baseline.
    pub ascent: i32,

    /// When set, this glyph is packed into the named shared bitmap and does
    /// not contribute an inline provider of its own.
    pub shared_bitmap: Option<String>,
}

impl Glyph {
    /// Whether this glyph is packed into a shared bitmap.
    pub fn has_bitmap(&self) -> bool {
        self.shared_bitmap.is_some()
    }

    /// The font provider this glyph contributes when it is not part of a
    /// shared bitmap.
    pub fn font_provider(&self) -> FontProvider {
        FontProvider::bitmap(
            self.texture.clone(),
            self.height,
            self.ascent,
            vec![self.chars.clone()],
        )
    }
}

/// A shared glyph bitmap: one texture carrying a grid of glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    /// Font this bitmap is rendered through.
    pub font: ResourceKey,

    /// Texture file reference.
    pub texture: String,

    /// Glyph cell height in pixels.
    pub height: i32,

    /// Distance from the glyph top to the text baseline.
    pub ascent: i32,

    /// Character rows mapped onto the texture grid.
    pub rows: Vec<String>,
}

impl GlyphBitmap {
    /// The font provider this bitmap contributes.
    pub fn font_provider(&self) -> FontProvider {
        FontProvider::bitmap(
            self.texture.clone(),
            self.height,
            self.ascent,
            self.rows.clone(),
        )
    }
}

/// Ordered, read-only enumeration of the host's glyph definitions.
pub trait GlyphRegistry {
    /// All registered glyphs, in registration order.
    fn glyphs(&self) -> &[Glyph];

    /// All tracked shared bitmaps, in registration order.
    fn glyph_bitmaps(&self) -> &[GlyphBitmap];
}

/// Opaque item-asset contributions from the host's item registry.
///
/// Implementations populate the pack's model and atlas collections directly.
/// The generator requires only that repeated invocation against unchanged
/// registry state produces identical entries.
pub trait ItemAssets {
    /// Add base and per-item model entries to the pack.
    fn contribute_models(&self, pack: &mut ResourcePack);

    /// Add atlas entries for item textures to the pack.
    fn contribute_atlases(&self, pack: &mut ResourcePack);
}

/// A [`GlyphRegistry`] backed by plain vectors.
///
/// Suitable for hosts that assemble their registry up front, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticGlyphRegistry {
    /// Registered glyphs, in order.
    pub glyphs: Vec<Glyph>,

    /// Tracked shared bitmaps, in order.
    pub glyph_bitmaps: Vec<GlyphBitmap>,
}

impl GlyphRegistry for StaticGlyphRegistry {
    fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn glyph_bitmaps(&self) -> &[GlyphBitmap] {
        &self.glyph_bitmaps
    }
}

/// An [`ItemAssets`] source that contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoItemAssets;

impl ItemAssets for NoItemAssets {
    fn contribute_models(&self, _pack: &mut ResourcePack) {}

    fn contribute_atlases(&self, _pack: &mut ResourcePack) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ResourceKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_glyph_provider_carries_definition() {
        let glyph = Glyph {
            font: key("packmill:default"),
            chars: "\u{E001}".to_string(),
            texture: "packmill:font/coin.png".to_string(),
            height: 10,
            ascent: 9,
            shared_bitmap: None,
        };
        assert!(!glyph.has_bitmap());

        match glyph.font_provider() {
            FontProvider::Bitmap(b) => {
                assert_eq!(b.file, "packmill:font/coin.png");
                assert_eq!(b.height, 10);
                assert_eq!(b.ascent, 9);
                assert_eq!(b.chars, vec!["\u{E001}".to_string()]);
            }
            other => panic!("expected bitmap provider, got {:?}", other),
        }
    }

    #[test]
    fn test_bitmap_provider_keeps_row_order() {
        let bitmap = GlyphBitmap {
            font: key("packmill:default"),
            texture: "packmill:font/grid.png".to_string(),
            height: 8,
            ascent: 7,
            rows: vec!["ab".to_string(), "cd".to_string()],
        };
        match bitmap.font_provider() {
            FontProvider::Bitmap(b) => assert_eq!(b.chars, vec!["ab", "cd"]),
            other => panic!("expected bitmap provider, got {:?}", other),
        }
    }

    #[test]
    fn test_static_registry_preserves_order() {
        let mut registry = StaticGlyphRegistry::default();
        for chars in ["a", "b", "c"] {
            registry.glyphs.push(Glyph {
                font: key("packmill:default"),
                chars: chars.to_string(),
                texture: format!("packmill:font/{}.png", chars),
                height: 8,
                ascent: 8,
                shared_bitmap: None,
            });
        }
        let order: Vec<_> = registry.glyphs().iter().map(|g| g.chars.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }
}
