//! Derived asset generation.
//!
//! Projects the host's glyph/item registry into pack entries before any
//! external pack is merged. Generation is a pure function of registry state:
//! running it twice against an unchanged registry yields identical entries.

use tracing::debug;

use crate::key::ResourceKey;
use crate::pack::{Font, FontProvider, ResourcePack};
use crate::registry::{GlyphRegistry, ItemAssets};

/// Synthesize font entries from the glyph registry and store them in `pack`.
///
/// Glyphs not packed into a shared bitmap contribute one provider each to the
/// font they declare; shared bitmaps contribute one provider per bitmap.
/// Providers are grouped by font key, preserving registry iteration order
/// within each font. Fonts that end up with no providers are skipped - an
/// empty font entry is never emitted.
///
/// A generated font replaces any same-keyed font already in the pack; fonts
/// from imported packs merge additively on top of it later.
pub fn generate_glyph_fonts(pack: &mut ResourcePack, registry: &dyn GlyphRegistry) {
    // Ordered group-by: first-seen font order, insertion order within a font.
    let mut groups: Vec<(ResourceKey, Vec<FontProvider>)> = Vec::new();

    for glyph in registry.glyphs() {
        if glyph.has_bitmap() {
            continue;
        }
        push_provider(&mut groups, &glyph.font, glyph.font_provider());
    }
    for bitmap in registry.glyph_bitmaps() {
        push_provider(&mut groups, &bitmap.font, bitmap.font_provider());
    }

    let fonts = groups.len();
    for (key, providers) in groups {
        if providers.is_empty() {
            continue;
        }
        pack.insert_font(Font::new(key, providers));
    }
    debug!(fonts, "generated glyph fonts");
}

fn push_provider(
    groups: &mut Vec<(ResourceKey, Vec<FontProvider>)>,
    font: &ResourceKey,
    provider: FontProvider,
) {
    match groups.iter_mut().find(|(key, _)| key == font) {
        Some((_, providers)) => providers.push(provider),
        None => groups.push((font.clone(), vec![provider])),
    }
}

/// Apply the host's opaque item-asset contributions (models and atlases).
pub fn generate_item_assets(pack: &mut ResourcePack, items: &dyn ItemAssets) {
    items.contribute_models(pack);
    items.contribute_atlases(pack);
}
