//! The pack generation orchestrator.
//!
//! [`PackGenerator`] sequences one full generation run over a pack root:
//!
//! 1. Read the base template directory (and the companion pack, if present)
//! 2. Generate derived assets from the glyph/item registry
//! 3. Fold every external pack under `external_packs/` into the base tree
//! 4. Post-process (staging purge, excluded extensions, cosmetic overrides)
//! 5. Write `pack.zip` and build the in-memory handle
//!
//! A run either reaches [`GenerateStage::Built`] or [`GenerateStage::Failed`];
//! there is no partial success. The previously built pack handle stays valid
//! until a newer run completes, so [`PackGenerator::built_pack`] always
//! reflects the last successful build.
//!
//! # Example
//!
//! ```ignore
//! use packmill::generator::PackGenerator;
//! use packmill::registry::{NoItemAssets, StaticGlyphRegistry};
//! use packmill::settings::PackSettings;
//!
//! let mut generator = PackGenerator::new("/srv/pack", PackSettings::default())?;
//! let result = generator.generate(&StaticGlyphRegistry::default(), &NoItemAssets)?;
//! println!("built {} files", result.file_count);
//! let built = generator.built_pack().expect("run succeeded");
//! ```

mod built;
mod error;

pub use built::BuiltPack;
pub use error::{GenerateError, GenerateRunResult};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::io::layout::{ASSETS_DIR, DEFAULT_ASSET_DIRS, EXTERNAL_PACKS_DIR, PACK_ARCHIVE_FILE};
use crate::io::{read_pack_directory, read_pack_zip, write_pack_zip, PackIoError, PackIoResult};
use crate::merge::merge;
use crate::pack::ResourcePack;
use crate::postprocess;
use crate::registry::{GlyphRegistry, ItemAssets};
use crate::settings::PackSettings;
use crate::{generate, key};

/// Stages of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStage {
    /// No run in progress yet.
    Idle,
    /// Reading the base template.
    ReadBase,
    /// Generating derived assets from the registry.
    GenerateDerived,
    /// Importing external packs.
    ImportExternal,
    /// Post-processing the merged tree.
    PostProcess,
    /// Writing the artifact.
    Write,
    /// Run complete; the built pack is available.
    Built,
    /// Run failed; the previous built pack (if any) is still available.
    Failed,
}

impl GenerateStage {
    /// Human-readable stage name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::ReadBase => "Reading base pack",
            Self::GenerateDerived => "Generating derived assets",
            Self::ImportExternal => "Importing external packs",
            Self::PostProcess => "Post-processing",
            Self::Write => "Writing artifact",
            Self::Built => "Built",
            Self::Failed => "Failed",
        }
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// External packs merged into the base tree.
    pub imports_merged: usize,

    /// External entries skipped (unreadable, or neither directory nor zip).
    pub imports_skipped: usize,

    /// Files in the final pack.
    pub file_count: usize,

    /// Size of the written archive in bytes.
    pub archive_size: u64,
}

/// Orchestrates generation runs over a pack root directory.
///
/// The generator owns the root layout and the most recent built pack. One
/// run executes at a time, sequentially and synchronously; the run holds
/// exclusive mutation rights over its asset tree for its duration.
pub struct PackGenerator {
    root: PathBuf,
    settings: PackSettings,
    stage: GenerateStage,
    built: Option<BuiltPack>,
}

impl PackGenerator {
    /// Create a generator over a pack root, pre-creating the default layout
    /// (`external_packs/`, `assets/minecraft/{textures,models,sounds,font,lang}`).
    ///
    /// # Errors
    ///
    /// Returns [`PackIoError::CreateDirFailed`] if the layout cannot be
    /// created.
    pub fn new(root: impl Into<PathBuf>, settings: PackSettings) -> PackIoResult<Self> {
        let root = root.into();
        ensure_default_layout(&root)?;
        Ok(Self {
            root,
            settings,
            stage: GenerateStage::Idle,
            built: None,
        })
    }

    /// The pack root this generator operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The settings in effect for runs of this generator.
    pub fn settings(&self) -> &PackSettings {
        &self.settings
    }

    /// The stage the most recent run reached.
    pub fn stage(&self) -> GenerateStage {
        self.stage
    }

    /// The most recently built pack, or `None` if no run has succeeded yet.
    pub fn built_pack(&self) -> Option<&BuiltPack> {
        self.built.as_ref()
    }

    /// Run one full generation pass.
    ///
    /// On success the built pack handle is replaced and a summary returned.
    /// On failure the run transitions to [`GenerateStage::Failed`] and any
    /// previously built pack remains available; no partial artifact is
    /// reported as success.
    pub fn generate(
        &mut self,
        glyphs: &dyn GlyphRegistry,
        items: &dyn ItemAssets,
    ) -> GenerateRunResult<GenerateResult> {
        info!(root = %self.root.display(), "generating resource pack");

        self.stage = GenerateStage::ReadBase;
        let mut pack = match read_pack_directory(&self.root) {
            Ok(pack) => pack,
            Err(e) => return Err(self.fail(GenerateError::ReadBase(e))),
        };
        // A previous run's artifact lives in the root and reads back as an
        // unknown file; it is output, not input.
        pack.remove_unknown_file(PACK_ARCHIVE_FILE);
        self.merge_companion_pack(&mut pack);

        self.stage = GenerateStage::GenerateDerived;
        generate::generate_glyph_fonts(&mut pack, glyphs);
        generate::generate_item_assets(&mut pack, items);

        self.stage = GenerateStage::ImportExternal;
        let (imports_merged, imports_skipped) = self.import_external_packs(&mut pack);

        self.stage = GenerateStage::PostProcess;
        postprocess::remove_staging_files(&mut pack);
        postprocess::remove_excluded_extensions(&mut pack, &self.settings.excluded_file_extensions);
        if self.settings.hide_scoreboard_numbers {
            postprocess::hide_scoreboard_numbers(&mut pack);
        }
        if self.settings.hide_scoreboard_background {
            postprocess::hide_scoreboard_background(&mut pack, &self.settings.target_version);
        }

        self.stage = GenerateStage::Write;
        let file_count = pack.file_count();
        let archive_path = self.root.join(PACK_ARCHIVE_FILE);
        let bytes = match write_pack_zip(&pack, &archive_path) {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(GenerateError::Write(e))),
        };

        let archive_size = bytes.len() as u64;
        self.built = Some(BuiltPack::new(bytes));
        self.stage = GenerateStage::Built;
        info!(
            files = file_count,
            bytes = archive_size,
            imports = imports_merged,
            "finished generating resource pack"
        );

        Ok(GenerateResult {
            imports_merged,
            imports_skipped,
            file_count,
            archive_size,
        })
    }

    /// Merge the configured companion pack when it exists on disk.
    ///
    /// Absence is the normal case, not an error; an unreadable companion pack
    /// is skipped with a warning like any external import.
    fn merge_companion_pack(&self, pack: &mut ResourcePack) {
        let Some(path) = &self.settings.companion_pack else {
            return;
        };
        if !path.exists() {
            return;
        }

        let result = if path.is_dir() {
            read_pack_directory(path)
        } else {
            read_pack_zip(path)
        };
        match result {
            Ok(companion) => {
                merge(pack, companion);
                info!(pack = %path.display(), "imported companion pack");
            }
            Err(e) => {
                warn!(pack = %path.display(), error = %e, "skipping unreadable companion pack");
            }
        }
    }

    /// Import every entry of the external-packs directory, in lexicographic
    /// name order, merging later imports over earlier ones.
    ///
    /// Returns `(merged, skipped)`. One unreadable or unrecognized entry
    /// never aborts the run.
    fn import_external_packs(&self, pack: &mut ResourcePack) -> (usize, usize) {
        let dir = self.root.join(EXTERNAL_PACKS_DIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot scan external packs directory");
                return (0, 0);
            }
        };

        let mut names: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        names.sort();

        let mut merged = 0;
        let mut skipped = 0;
        for path in names {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let result = if path.is_dir() {
                info!(pack = %name, "importing pack");
                read_pack_directory(&path)
            } else if name.ends_with(".zip") {
                info!(pack = %name, "importing zipped pack");
                read_pack_zip(&path)
            } else {
                warn!(
                    file = %name,
                    "skipping import entry: neither a directory nor a zip file"
                );
                skipped += 1;
                continue;
            };

            match result {
                Ok(imported) => {
                    merge(pack, imported);
                    merged += 1;
                }
                Err(e) => {
                    warn!(pack = %name, error = %e, "skipping unreadable imported pack");
                    skipped += 1;
                }
            }
        }

        (merged, skipped)
    }

    fn fail(&mut self, error: GenerateError) -> GenerateError {
        self.stage = GenerateStage::Failed;
        warn!(error = %error, "generation run failed");
        error
    }
}

/// Pre-create the directories a pack root is expected to carry.
fn ensure_default_layout(root: &Path) -> PackIoResult<()> {
    let minecraft_assets = root.join(ASSETS_DIR).join(key::DEFAULT_NAMESPACE);
    let mut dirs = vec![root.join(EXTERNAL_PACKS_DIR)];
    dirs.extend(DEFAULT_ASSET_DIRS.iter().map(|d| minecraft_assets.join(d)));

    for dir in dirs {
        fs::create_dir_all(&dir).map_err(|e| PackIoError::CreateDirFailed {
            path: dir.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NoItemAssets, StaticGlyphRegistry};
    use tempfile::TempDir;

    fn new_generator(temp: &TempDir) -> PackGenerator {
        PackGenerator::new(temp.path(), PackSettings::default()).unwrap()
    }

    #[test]
    fn test_new_creates_default_layout() {
        let temp = TempDir::new().unwrap();
        let generator = new_generator(&temp);

        assert!(temp.path().join(EXTERNAL_PACKS_DIR).is_dir());
        for dir in DEFAULT_ASSET_DIRS {
            assert!(
                temp.path().join("assets/minecraft").join(dir).is_dir(),
                "missing assets/minecraft/{}",
                dir
            );
        }
        assert_eq!(generator.stage(), GenerateStage::Idle);
        assert!(generator.built_pack().is_none());
    }

    #[test]
    fn test_generate_reaches_built() {
        let temp = TempDir::new().unwrap();
        let mut generator = new_generator(&temp);

        let result = generator
            .generate(&StaticGlyphRegistry::default(), &NoItemAssets)
            .unwrap();

        assert_eq!(generator.stage(), GenerateStage::Built);
        assert!(generator.built_pack().is_some());
        assert!(temp.path().join(PACK_ARCHIVE_FILE).exists());
        assert_eq!(result.imports_merged, 0);
        assert_eq!(result.imports_skipped, 0);
    }

    #[test]
    fn test_stale_artifact_not_read_back_into_next_build() {
        let temp = TempDir::new().unwrap();
        let mut generator = new_generator(&temp);
        let registry = StaticGlyphRegistry::default();

        generator.generate(&registry, &NoItemAssets).unwrap();
        let first_hash = generator.built_pack().unwrap().hash().to_string();

        // Second run reads a root that now contains pack.zip; the artifact
        // must not leak into the new pack as an unknown file.
        generator.generate(&registry, &NoItemAssets).unwrap();
        assert_eq!(generator.built_pack().unwrap().hash(), first_hash);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(GenerateStage::Idle.name(), "Idle");
        assert_eq!(GenerateStage::Built.name(), "Built");
        assert_eq!(GenerateStage::Failed.name(), "Failed");
    }
}
