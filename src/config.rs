//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treedown/treedown.toml`
//! 3. Environment variables: `TREEDOWN_*` prefix (e.g.
//!    `TREEDOWN_LAYOUT__LEVEL_GAP=80`)

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutConfig;

/// Unified configuration for treedown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Diagram geometry used by the SVG export
    pub layout: LayoutConfig,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid environment override: {0}")]
    Env(#[from] config::ConfigError),

    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// XDG config directory for treedown.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treedown").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treedown.toml"))
}

impl Settings {
    /// Load settings with layered precedence: compiled defaults, then the
    /// global config file (missing keys keep their defaults), then
    /// `TREEDOWN_*` environment variables as explicit overrides.
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = match global_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env_overrides()?;
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TREEDOWN_*` environment variables. Env vars replace values,
    /// they are explicit user overrides.
    fn apply_env_overrides(&mut self) -> Result<(), SettingsError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREEDOWN").separator("__"))
            .build()?;

        if let Ok(val) = config.get_float("layout.level_gap") {
            self.layout.level_gap = val;
        }
        if let Ok(val) = config.get_float("layout.sibling_gap") {
            self.layout.sibling_gap = val;
        }
        if let Ok(val) = config.get_int("layout.max_chars_per_line") {
            self.layout.max_chars_per_line = val.max(1) as usize;
        }
        if let Ok(val) = config.get_float("layout.char_px") {
            self.layout.char_px = val;
        }
        if let Ok(val) = config.get_float("layout.line_height") {
            self.layout.line_height = val;
        }
        if let Ok(val) = config.get_float("layout.padding_x") {
            self.layout.padding_x = val;
        }
        if let Ok(val) = config.get_float("layout.padding_y") {
            self.layout.padding_y = val;
        }
        if let Ok(val) = config.get_float("layout.min_box_width") {
            self.layout.min_box_width = val;
        }
        if let Ok(val) = config.get_float("layout.min_box_height") {
            self.layout.min_box_height = val;
        }
        if let Ok(val) = config.get_float("layout.margin") {
            self.layout.margin = val;
        }

        Ok(())
    }

    /// Render the merged settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write a commented config template to the global location.
    /// Fails if the file already exists.
    pub fn write_template() -> Result<PathBuf, SettingsError> {
        let path = global_config_path().ok_or(SettingsError::NoConfigDir)?;
        if path.exists() {
            return Err(SettingsError::AlreadyExists(path));
        }
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| SettingsError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let body = Self::default().to_toml()?;
        let template = format!(
            "# treedown configuration\n\
             # All values are optional; unset keys keep their compiled defaults.\n\
             # Environment variables override this file, e.g. TREEDOWN_LAYOUT__LEVEL_GAP=80\n\n\
             {body}"
        );
        std::fs::write(&path, template).map_err(|source| SettingsError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let settings: Settings = toml::from_str("[layout]\nlevel_gap = 90.0\n").unwrap();
        assert_eq!(settings.layout.level_gap, 90.0);
        assert_eq!(settings.layout.sibling_gap, 24.0);
        assert_eq!(settings.layout.max_chars_per_line, 24);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(settings, back);
    }
}
