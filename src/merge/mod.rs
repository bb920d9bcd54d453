//! The pack merge engine.
//!
//! [`merge`] folds an imported pack into a base pack, category by category.
//! Monolithic blobs have no internal structure to combine, so they are
//! last-writer-wins; structured assets are lists or maps of independent
//! sub-entries contributed by different packs for the same logical asset, so
//! they combine additively - an earlier pack's contributions are never
//! silently dropped by a later one.
//!
//! | Category | Rule |
//! |---|---|
//! | textures, sounds, unknown files | imported overwrites base by key |
//! | meta, icon | imported replaces base only when present |
//! | models | imported's overrides, then base's appended |
//! | fonts | imported's providers, then base's appended |
//! | sound registries | imported's events, then base's appended |
//! | atlases | base's sources, then imported's appended |
//! | languages | union of translations; imported wins per id |
//!
//! Merging never fails: a malformed imported pack is rejected at read time,
//! never here. Each category is processed as one pass over every imported
//! entry; there is no ordering requirement between categories.

use tracing::trace;

use crate::pack::ResourcePack;

/// Fold `imported` into `base`, consuming the imported pack.
///
/// # Example
///
/// ```
/// use packmill::merge::merge;
/// use packmill::pack::ResourcePack;
///
/// let mut base = ResourcePack::new();
/// base.textures.insert("item/a.png".parse().unwrap(), vec![1]);
///
/// let mut imported = ResourcePack::new();
/// imported.textures.insert("item/a.png".parse().unwrap(), vec![2]);
///
/// merge(&mut base, imported);
/// assert_eq!(base.textures[&"item/a.png".parse().unwrap()], vec![2]);
/// ```
pub fn merge(base: &mut ResourcePack, imported: ResourcePack) {
    trace!(files = imported.file_count(), "merging imported pack");

    // Overwrite categories.
    base.textures.extend(imported.textures);
    base.sounds.extend(imported.sounds);
    base.unknown_files.extend(imported.unknown_files);

    // Singletons: the imported value is preferred only when present.
    if imported.meta.is_some() {
        base.meta = imported.meta;
    }
    if imported.icon.is_some() {
        base.icon = imported.icon;
    }

    // Additive categories: the imported entry becomes canonical at its key,
    // carrying the base entry's contributions so nothing is lost.
    for (key, mut model) in imported.models {
        if let Some(existing) = base.models.remove(&key) {
            model.overrides.extend(existing.overrides);
        }
        base.models.insert(key, model);
    }

    for (key, mut font) in imported.fonts {
        if let Some(existing) = base.fonts.remove(&key) {
            font.providers.extend(existing.providers);
        }
        base.fonts.insert(key, font);
    }

    for (namespace, mut registry) in imported.sound_registries {
        if let Some(existing) = base.sound_registries.remove(&namespace) {
            registry.events.extend(existing.events);
        }
        base.sound_registries.insert(namespace, registry);
    }

    // Atlas sources merge into the base atlas: base-only sources survive.
    for (key, mut atlas) in imported.atlases {
        if let Some(existing) = base.atlases.remove(&key) {
            let mut sources = existing.sources;
            sources.extend(atlas.sources);
            atlas.sources = sources;
        }
        base.atlases.insert(key, atlas);
    }

    for (key, mut language) in imported.languages {
        if let Some(existing) = base.languages.remove(&key) {
            for (id, value) in existing.translations {
                language.translations.entry(id).or_insert(value);
            }
        }
        base.languages.insert(key, language);
    }
}
