//! The canonical in-memory representation of a resource pack.
//!
//! [`ResourcePack`] is a mutable aggregate of typed asset collections. One
//! instance is owned by exactly one pipeline stage at a time: the generator
//! reads the base tree, the derived-asset generator appends into it, the merge
//! engine folds imported trees into it, the post-processor filters it, and the
//! writer consumes it. No stage shares it concurrently.
//!
//! # Collections
//!
//! | Collection | Key | Merge semantics |
//! |---|---|---|
//! | `textures`, `sounds` | [`ResourceKey`] | last writer wins |
//! | `models`, `fonts`, `atlases`, `languages` | [`ResourceKey`] | additive |
//! | `sound_registries` | namespace | additive |
//! | `unknown_files` | relative path | last writer wins |
//! | `meta`, `icon` | singleton | imported value preferred when present |
//!
//! Uniqueness of a key within a collection is enforced by the map structure
//! itself; there are no auxiliary checks.

mod atlas;
mod font;
mod language;
mod meta;
mod model;
mod sound;

pub use atlas::Atlas;
pub use font::{BitmapProvider, Font, FontProvider, SpaceProvider};
pub use language::Language;
pub use meta::{PackMeta, PackSection};
pub use model::{ItemOverride, Model};
pub use sound::{SoundEvent, SoundRegistry};

use std::collections::BTreeMap;

use crate::key::ResourceKey;

/// A complete resource pack held in memory.
///
/// # Example
///
/// ```
/// use packmill::key::ResourceKey;
/// use packmill::pack::{Model, ResourcePack};
///
/// let mut pack = ResourcePack::new();
/// let key: ResourceKey = "item/ruby".parse().unwrap();
/// pack.insert_model(Model::new(key.clone()));
///
/// assert!(pack.models.contains_key(&key));
/// assert_eq!(pack.file_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourcePack {
    /// Texture blobs by resource key.
    pub textures: BTreeMap<ResourceKey, Vec<u8>>,

    /// Sound blobs by resource key.
    pub sounds: BTreeMap<ResourceKey, Vec<u8>>,

    /// Model files by resource key.
    pub models: BTreeMap<ResourceKey, Model>,

    /// Font files by resource key.
    pub fonts: BTreeMap<ResourceKey, Font>,

    /// Sound event registries by namespace.
    pub sound_registries: BTreeMap<String, SoundRegistry>,

    /// Atlas files by resource key.
    pub atlases: BTreeMap<ResourceKey, Atlas>,

    /// Language files by resource key.
    pub languages: BTreeMap<ResourceKey, Language>,

    /// Files with no structural representation, by pack-relative path.
    pub unknown_files: BTreeMap<String, Vec<u8>>,

    /// Pack metadata (`pack.mcmeta`), if present.
    pub meta: Option<PackMeta>,

    /// Pack icon (`pack.png`), if present.
    pub icon: Option<Vec<u8>>,
}

impl ResourcePack {
    /// Create an empty pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model, keyed by its own resource key.
    pub fn insert_model(&mut self, model: Model) {
        self.models.insert(model.key.clone(), model);
    }

    /// Insert a font, keyed by its own resource key.
    pub fn insert_font(&mut self, font: Font) {
        self.fonts.insert(font.key.clone(), font);
    }

    /// Insert a sound registry, keyed by its namespace.
    pub fn insert_sound_registry(&mut self, registry: SoundRegistry) {
        self.sound_registries
            .insert(registry.namespace.clone(), registry);
    }

    /// Insert an atlas, keyed by its own resource key.
    pub fn insert_atlas(&mut self, atlas: Atlas) {
        self.atlases.insert(atlas.key.clone(), atlas);
    }

    /// Insert a language file, keyed by its own resource key.
    pub fn insert_language(&mut self, language: Language) {
        self.languages.insert(language.key.clone(), language);
    }

    /// Store an unknown file, replacing any existing entry at the path.
    pub fn insert_unknown_file(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.unknown_files.insert(path.into(), bytes);
    }

    /// Remove an unknown file, returning its contents if it was present.
    pub fn remove_unknown_file(&mut self, path: &str) -> Option<Vec<u8>> {
        self.unknown_files.remove(path)
    }

    /// Total number of files this pack would serialize to.
    pub fn file_count(&self) -> usize {
        self.textures.len()
            + self.sounds.len()
            + self.models.len()
            + self.fonts.len()
            + self.sound_registries.len()
            + self.atlases.len()
            + self.languages.len()
            + self.unknown_files.len()
            + usize::from(self.meta.is_some())
            + usize::from(self.icon.is_some())
    }

    /// Whether the pack holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ResourceKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_by_own_key() {
        let mut pack = ResourcePack::new();
        pack.insert_model(Model::new(key("item/a")));
        pack.insert_font(Font::new(key("packmill:default"), Vec::new()));
        pack.insert_sound_registry(SoundRegistry::new("packmill"));

        assert!(pack.models.contains_key(&key("item/a")));
        assert!(pack.fonts.contains_key(&key("packmill:default")));
        assert!(pack.sound_registries.contains_key("packmill"));
    }

    #[test]
    fn test_map_enforces_key_uniqueness() {
        let mut pack = ResourcePack::new();
        pack.textures.insert(key("item/a"), vec![1]);
        pack.textures.insert(key("item/a"), vec![2]);
        assert_eq!(pack.textures.len(), 1);
        assert_eq!(pack.textures[&key("item/a")], vec![2]);
    }

    #[test]
    fn test_file_count_includes_singletons() {
        let mut pack = ResourcePack::new();
        assert!(pack.is_empty());

        pack.meta = Some(PackMeta::new(34, "d"));
        pack.icon = Some(vec![0u8; 4]);
        pack.insert_unknown_file("credits.txt", b"hi".to_vec());
        assert_eq!(pack.file_count(), 3);
    }

    #[test]
    fn test_remove_unknown_file() {
        let mut pack = ResourcePack::new();
        pack.insert_unknown_file("pack.zip", vec![1, 2, 3]);
        assert_eq!(pack.remove_unknown_file("pack.zip"), Some(vec![1, 2, 3]));
        assert_eq!(pack.remove_unknown_file("pack.zip"), None);
    }
}
