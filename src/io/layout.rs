//! Pack filesystem layout conventions.
//!
//! This module is the single source of truth for how pack-relative paths map
//! to typed collections and back:
//!
//! - `pack.mcmeta`, `pack.png`: metadata and icon singletons
//! - `assets/<ns>/textures/**`: texture blobs
//! - `assets/<ns>/sounds.json`: the namespace sound registry
//! - `assets/<ns>/sounds/**`: sound blobs
//! - `assets/<ns>/models/**.json`: models
//! - `assets/<ns>/font/**.json`: fonts
//! - `assets/<ns>/lang/**.json`: languages
//! - `assets/<ns>/atlases/**.json`: atlases
//! - everything else: unknown files, captured verbatim
//!
//! All other modules use these functions rather than constructing pack paths
//! directly.

use std::path::PathBuf;

use crate::key::ResourceKey;
use crate::pack::{Atlas, Font, Language, Model, PackMeta, ResourcePack, SoundRegistry};

use super::error::{PackIoError, PackIoResult};

/// Pack metadata filename at the pack root.
pub const PACK_META_FILE: &str = "pack.mcmeta";

/// Pack icon filename at the pack root.
pub const PACK_ICON_FILE: &str = "pack.png";

/// Final artifact filename at the pack root.
pub const PACK_ARCHIVE_FILE: &str = "pack.zip";

/// Directory scanned for imported packs, relative to the pack root.
pub const EXTERNAL_PACKS_DIR: &str = "external_packs";

/// Root directory of namespaced assets.
pub const ASSETS_DIR: &str = "assets";

/// Asset subdirectories pre-created under `assets/minecraft/`.
pub const DEFAULT_ASSET_DIRS: &[&str] = &["textures", "models", "sounds", "font", "lang"];

/// Classification of one pack-relative path.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// `pack.mcmeta`.
    Meta,
    /// `pack.png`.
    Icon,
    /// A texture blob.
    Texture(ResourceKey),
    /// A sound blob.
    Sound(ResourceKey),
    /// A namespace sound registry (`sounds.json`).
    SoundRegistry(String),
    /// A model file.
    Model(ResourceKey),
    /// A font file.
    Font(ResourceKey),
    /// A language file.
    Language(ResourceKey),
    /// An atlas file.
    Atlas(ResourceKey),
    /// No structural representation; stored as an unknown file.
    Unknown,
}

/// Classify a pack-relative path (forward slashes) into its collection.
///
/// Paths that *look* typed but carry characters invalid in a resource key
/// fall back to [`EntryKind::Unknown`] - a lossless read never rejects a
/// file for its name.
pub fn classify(path: &str) -> EntryKind {
    if path == PACK_META_FILE {
        return EntryKind::Meta;
    }
    if path == PACK_ICON_FILE {
        return EntryKind::Icon;
    }

    let Some(rest) = path.strip_prefix("assets/") else {
        return EntryKind::Unknown;
    };
    let Some((namespace, entry)) = rest.split_once('/') else {
        return EntryKind::Unknown;
    };

    if entry == "sounds.json" {
        return match ResourceKey::new(namespace, "sounds") {
            Ok(_) => EntryKind::SoundRegistry(namespace.to_string()),
            Err(_) => EntryKind::Unknown,
        };
    }

    if let Some(p) = entry.strip_prefix("textures/") {
        return typed(namespace, p, EntryKind::Texture);
    }
    if let Some(p) = entry.strip_prefix("sounds/") {
        return typed(namespace, p, EntryKind::Sound);
    }
    if let Some(p) = json_entry(entry, "models/") {
        return typed(namespace, p, EntryKind::Model);
    }
    if let Some(p) = json_entry(entry, "font/") {
        return typed(namespace, p, EntryKind::Font);
    }
    if let Some(p) = json_entry(entry, "lang/") {
        return typed(namespace, p, EntryKind::Language);
    }
    if let Some(p) = json_entry(entry, "atlases/") {
        return typed(namespace, p, EntryKind::Atlas);
    }

    EntryKind::Unknown
}

fn json_entry<'a>(entry: &'a str, prefix: &str) -> Option<&'a str> {
    entry.strip_prefix(prefix)?.strip_suffix(".json")
}

fn typed(namespace: &str, path: &str, kind: fn(ResourceKey) -> EntryKind) -> EntryKind {
    match ResourceKey::new(namespace, path) {
        Ok(key) => kind(key),
        Err(_) => EntryKind::Unknown,
    }
}

/// Pack-relative path of a texture.
pub fn texture_path(key: &ResourceKey) -> String {
    format!("assets/{}/textures/{}", key.namespace(), key.path())
}

/// Pack-relative path of a sound blob.
pub fn sound_path(key: &ResourceKey) -> String {
    format!("assets/{}/sounds/{}", key.namespace(), key.path())
}

/// Pack-relative path of a model file.
pub fn model_path(key: &ResourceKey) -> String {
    format!("assets/{}/models/{}.json", key.namespace(), key.path())
}

/// Pack-relative path of a font file.
pub fn font_path(key: &ResourceKey) -> String {
    format!("assets/{}/font/{}.json", key.namespace(), key.path())
}

/// Pack-relative path of a language file.
pub fn language_path(key: &ResourceKey) -> String {
    format!("assets/{}/lang/{}.json", key.namespace(), key.path())
}

/// Pack-relative path of an atlas file.
pub fn atlas_path(key: &ResourceKey) -> String {
    format!("assets/{}/atlases/{}.json", key.namespace(), key.path())
}

/// Pack-relative path of a namespace sound registry.
pub fn sound_registry_path(namespace: &str) -> String {
    format!("assets/{}/sounds.json", namespace)
}

/// Insert one raw entry into a pack, parsing typed entries on the way.
///
/// # Errors
///
/// Returns [`PackIoError::MalformedPack`] when a typed JSON entry fails to
/// parse. Unknown entries cannot fail.
pub fn insert_entry(pack: &mut ResourcePack, path: &str, bytes: Vec<u8>) -> PackIoResult<()> {
    let malformed = |e: serde_json::Error| PackIoError::MalformedPack {
        path: PathBuf::from(path),
        reason: e.to_string(),
    };

    match classify(path) {
        EntryKind::Meta => {
            pack.meta = Some(PackMeta::from_json(&bytes).map_err(malformed)?);
        }
        EntryKind::Icon => pack.icon = Some(bytes),
        EntryKind::Texture(key) => {
            pack.textures.insert(key, bytes);
        }
        EntryKind::Sound(key) => {
            pack.sounds.insert(key, bytes);
        }
        EntryKind::SoundRegistry(namespace) => {
            pack.insert_sound_registry(
                SoundRegistry::from_json(namespace, &bytes).map_err(malformed)?,
            );
        }
        EntryKind::Model(key) => {
            pack.insert_model(Model::from_json(key, &bytes).map_err(malformed)?);
        }
        EntryKind::Font(key) => {
            pack.insert_font(Font::from_json(key, &bytes).map_err(malformed)?);
        }
        EntryKind::Language(key) => {
            pack.insert_language(Language::from_json(key, &bytes).map_err(malformed)?);
        }
        EntryKind::Atlas(key) => {
            pack.insert_atlas(Atlas::from_json(key, &bytes).map_err(malformed)?);
        }
        EntryKind::Unknown => pack.insert_unknown_file(path, bytes),
    }

    Ok(())
}

/// Serialize a pack to its complete list of (relative path, bytes) entries.
///
/// Entry order is deterministic: singletons first, then each collection in
/// key order.
pub fn flatten(pack: &ResourcePack) -> PackIoResult<Vec<(String, Vec<u8>)>> {
    let serialize_err = |entry: &str| {
        let entry = entry.to_string();
        move |e: serde_json::Error| PackIoError::Serialize {
            entry,
            reason: e.to_string(),
        }
    };

    let mut entries = Vec::with_capacity(pack.file_count());

    if let Some(meta) = &pack.meta {
        let bytes = meta.to_json_bytes().map_err(serialize_err(PACK_META_FILE))?;
        entries.push((PACK_META_FILE.to_string(), bytes));
    }
    if let Some(icon) = &pack.icon {
        entries.push((PACK_ICON_FILE.to_string(), icon.clone()));
    }

    for (key, bytes) in &pack.textures {
        entries.push((texture_path(key), bytes.clone()));
    }
    for (key, bytes) in &pack.sounds {
        entries.push((sound_path(key), bytes.clone()));
    }
    for (namespace, registry) in &pack.sound_registries {
        let path = sound_registry_path(namespace);
        let bytes = registry.to_json_bytes().map_err(serialize_err(&path))?;
        entries.push((path, bytes));
    }
    for (key, model) in &pack.models {
        let path = model_path(key);
        let bytes = model.to_json_bytes().map_err(serialize_err(&path))?;
        entries.push((path, bytes));
    }
    for (key, font) in &pack.fonts {
        let path = font_path(key);
        let bytes = font.to_json_bytes().map_err(serialize_err(&path))?;
        entries.push((path, bytes));
    }
    for (key, language) in &pack.languages {
        let path = language_path(key);
        let bytes = language.to_json_bytes().map_err(serialize_err(&path))?;
        entries.push((path, bytes));
    }
    for (key, atlas) in &pack.atlases {
        let path = atlas_path(key);
        let bytes = atlas.to_json_bytes().map_err(serialize_err(&path))?;
        entries.push((path, bytes));
    }
    for (path, bytes) in &pack.unknown_files {
        entries.push((path.clone(), bytes.clone()));
    }

    Ok(entries)
}
