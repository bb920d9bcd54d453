//! Post-processing of the merged pack.
//!
//! Applied after all imports are merged and before the pack is written:
//!
//! - [`remove_staging_files`]: drops `external_packs/` entries that are
//!   artifacts of reading imported packs out of the pack root
//! - [`remove_excluded_extensions`]: configuration-driven filtering of
//!   unknown files, with a protected set that can never be excluded
//! - [`hide_scoreboard_numbers`] / [`hide_scoreboard_background`]: fixed
//!   cosmetic shader injections

mod shaders;

pub use shaders::{
    SCOREBOARD_BACKGROUND_LEGACY_PATH, SCOREBOARD_BACKGROUND_MODERN_PATH,
    SCOREBOARD_NUMBERS_JSON_PATH, SCOREBOARD_NUMBERS_VSH_PATH,
};

use semver::Version;
use tracing::{debug, warn};

use crate::io::layout::EXTERNAL_PACKS_DIR;
use crate::pack::ResourcePack;

/// Extensions that can never be excluded, even when configured.
///
/// Excluding any of these would strip structurally required files from the
/// pack, so a configuration naming one is treated as an error and ignored.
pub const PROTECTED_EXTENSIONS: &[&str] = &[".json", ".png", ".mcmeta"];

/// Minimum client version using the modern gui shader for the scoreboard
/// background.
pub fn background_threshold() -> Version {
    Version::new(1, 20, 1)
}

/// Remove unknown files staged under the external-packs directory.
///
/// Reading the pack root captures the import staging area as unknown files;
/// those are inputs, not pack contents, and must not reach the artifact.
pub fn remove_staging_files(pack: &mut ResourcePack) {
    let prefix = format!("{}/", EXTERNAL_PACKS_DIR);
    let before = pack.unknown_files.len();
    pack.unknown_files.retain(|path, _| !path.starts_with(&prefix));
    let removed = before - pack.unknown_files.len();
    if removed > 0 {
        debug!(removed, "removed staged external pack files");
    }
}

/// Remove unknown files whose path ends with a configured extension.
///
/// Each entry is normalized to a leading dot. Blank entries and entries in
/// [`PROTECTED_EXTENSIONS`] are ignored with a warning; a misconfigured
/// exclusion list can never delete structural files.
pub fn remove_excluded_extensions(pack: &mut ResourcePack, excluded: &[String]) {
    for raw in excluded {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "." {
            warn!(entry = %raw, "ignoring blank excluded-extension entry");
            continue;
        }

        let extension = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{}", trimmed)
        };

        if PROTECTED_EXTENSIONS.contains(&extension.as_str()) {
            warn!(
                extension = %extension,
                "refusing to exclude protected extension"
            );
            continue;
        }

        let before = pack.unknown_files.len();
        pack.unknown_files.retain(|path, _| !path.ends_with(&extension));
        debug!(
            extension = %extension,
            removed = before - pack.unknown_files.len(),
            "applied excluded extension"
        );
    }
}

/// Inject the fixed shader files that hide scoreboard sidebar numbers.
///
/// Unconditional overwrites; these entries are synthesized, not imported.
pub fn hide_scoreboard_numbers(pack: &mut ResourcePack) {
    pack.insert_unknown_file(
        shaders::SCOREBOARD_NUMBERS_JSON_PATH,
        shaders::SCOREBOARD_NUMBERS_JSON.as_bytes().to_vec(),
    );
    pack.insert_unknown_file(
        shaders::SCOREBOARD_NUMBERS_VSH_PATH,
        shaders::SCOREBOARD_NUMBERS_VSH.as_bytes().to_vec(),
    );
}

/// Inject the fixed shader file that hides the scoreboard background.
///
/// The file name and contents depend on the target client version: clients
/// at or above [`background_threshold`] use the gui vertex shader, older
/// clients the position-color fragment shader.
pub fn hide_scoreboard_background(pack: &mut ResourcePack, target_version: &Version) {
    if *target_version >= background_threshold() {
        pack.insert_unknown_file(
            shaders::SCOREBOARD_BACKGROUND_MODERN_PATH,
            shaders::SCOREBOARD_BACKGROUND_MODERN.as_bytes().to_vec(),
        );
    } else {
        pack.insert_unknown_file(
            shaders::SCOREBOARD_BACKGROUND_LEGACY_PATH,
            shaders::SCOREBOARD_BACKGROUND_LEGACY.as_bytes().to_vec(),
        );
    }
}
