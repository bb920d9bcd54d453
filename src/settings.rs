//! Pack generation settings.
//!
//! The host owns real configuration parsing; this module provides the plain
//! settings struct the generator consumes, plus a small INI loader for hosts
//! that keep pack settings in a file. Every field has a working default, so
//! `PackSettings::default()` is a valid configuration.

use std::path::{Path, PathBuf};

use ini::Ini;
use semver::Version;
use thiserror::Error;

use crate::postprocess::background_threshold;

/// Errors produced while loading settings from a file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read or parsed.
    #[error("failed to load settings from {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// A value could not be interpreted.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration consumed by a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PackSettings {
    /// Inject the shader overrides that hide scoreboard sidebar numbers.
    pub hide_scoreboard_numbers: bool,

    /// Inject the shader override that hides the scoreboard background.
    pub hide_scoreboard_background: bool,

    /// Unknown-file extensions to strip from the final pack.
    ///
    /// Entries are normalized at application time; protected extensions are
    /// never stripped regardless of this list.
    pub excluded_file_extensions: Vec<String>,

    /// Client version the pack targets; selects version-dependent cosmetic
    /// files.
    pub target_version: Version,

    /// Optional pre-rendered companion pack merged right after the base read
    /// when the file exists.
    pub companion_pack: Option<PathBuf>,
}

impl Default for PackSettings {
    fn default() -> Self {
        Self {
            hide_scoreboard_numbers: false,
            hide_scoreboard_background: false,
            excluded_file_extensions: Vec::new(),
            target_version: background_threshold(),
            companion_pack: None,
        }
    }
}

impl PackSettings {
    /// Enable or disable the scoreboard-number override.
    pub fn with_hide_scoreboard_numbers(mut self, enabled: bool) -> Self {
        self.hide_scoreboard_numbers = enabled;
        self
    }

    /// Enable or disable the scoreboard-background override.
    pub fn with_hide_scoreboard_background(mut self, enabled: bool) -> Self {
        self.hide_scoreboard_background = enabled;
        self
    }

    /// Set the excluded-extension list.
    pub fn with_excluded_file_extensions(
        mut self,
        extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        self.excluded_file_extensions = extensions.into_iter().collect();
        self
    }

    /// Set the target client version.
    pub fn with_target_version(mut self, version: Version) -> Self {
        self.target_version = version;
        self
    }

    /// Set the companion pack path.
    pub fn with_companion_pack(mut self, path: impl Into<PathBuf>) -> Self {
        self.companion_pack = Some(path.into());
        self
    }

    /// Load settings from the `[pack]` section of an INI file.
    ///
    /// A missing file yields defaults - settings files are optional. Keys not
    /// present keep their defaults.
    ///
    /// # Recognized keys
    ///
    /// ```ini
    /// [pack]
    /// hide_scoreboard_numbers = true
    /// hide_scoreboard_background = false
    /// excluded_file_extensions = .ogg, .txt
    /// target_version = 1.20.4
    /// companion_pack = /srv/companion/resource_pack.zip
    /// ```
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = Ini::load_from_file(path).map_err(|e| SettingsError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut settings = Self::default();
        let Some(section) = file.section(Some("pack")) else {
            return Ok(settings);
        };

        if let Some(value) = section.get("hide_scoreboard_numbers") {
            settings.hide_scoreboard_numbers = parse_bool("hide_scoreboard_numbers", value)?;
        }
        if let Some(value) = section.get("hide_scoreboard_background") {
            settings.hide_scoreboard_background = parse_bool("hide_scoreboard_background", value)?;
        }
        if let Some(value) = section.get("excluded_file_extensions") {
            settings.excluded_file_extensions = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = section.get("target_version") {
            settings.target_version =
                Version::parse(value.trim()).map_err(|e| SettingsError::InvalidValue {
                    key: "target_version",
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
        }
        if let Some(value) = section.get("companion_pack") {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                settings.companion_pack = Some(PathBuf::from(trimmed));
            }
        }

        Ok(settings)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(SettingsError::InvalidValue {
            key,
            value: other.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
