//! Packmill - Minecraft resource pack assembly.
//!
//! This library builds a single distributable resource pack by merging a base
//! asset tree with any number of externally supplied packs (directories or
//! zip archives), generating derived entries from the host's glyph/item
//! registry, post-processing the merged tree, and serializing the result to a
//! `pack.zip` artifact plus an in-memory built handle.
//!
//! # Pipeline
//!
//! ```text
//! template dir ──► ResourcePack ──► derived assets ──► merge imports ──► post-process ──► pack.zip
//!                  (pack)           (generate)         (merge)           (postprocess)    (io) + BuiltPack
//! ```
//!
//! The merge engine is the heart of the system: same-keyed monolithic blobs
//! (textures, sounds, unknown files) are last-writer-wins, while structured
//! assets (models, fonts, sound registries, atlases, languages) combine
//! additively so no pack's contributions are silently dropped. See
//! [`merge`] for the per-category rules.
//!
//! # Example
//!
//! ```ignore
//! use packmill::generator::PackGenerator;
//! use packmill::registry::{NoItemAssets, StaticGlyphRegistry};
//! use packmill::settings::PackSettings;
//!
//! let settings = PackSettings::load("plugins/packmill/pack.ini".as_ref())?;
//! let mut generator = PackGenerator::new("plugins/packmill/pack", settings)?;
//!
//! generator.generate(&StaticGlyphRegistry::default(), &NoItemAssets)?;
//! let built = generator.built_pack().expect("run succeeded");
//! println!("pack hash: {}", built.hash());
//! ```

pub mod generate;
pub mod generator;
pub mod io;
pub mod key;
pub mod merge;
pub mod pack;
pub mod postprocess;
pub mod registry;
pub mod settings;

// Re-export the main entry points for convenience.
pub use generator::{BuiltPack, GenerateError, GenerateResult, GenerateStage, PackGenerator};
pub use key::ResourceKey;
pub use merge::merge;
pub use pack::ResourcePack;
pub use settings::PackSettings;
