// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode
//! - `[panel]` - Shot panel settings (thumbnail size, crop zoom slider)
//! - `[library]` - Where relative image paths are resolved from
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `SHOTLIST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use shotlist::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Light, dark, or follow the OS.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Shot panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelConfig {
    /// Thumbnail edge length in logical pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u16>,

    /// Lower bound of the crop editor zoom slider.
    #[serde(
        default = "default_crop_zoom_min",
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_zoom_min: Option<f32>,

    /// Upper bound of the crop editor zoom slider.
    #[serde(
        default = "default_crop_zoom_max",
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_zoom_max: Option<f32>,

    /// Step of the crop editor zoom slider.
    #[serde(
        default = "default_crop_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_zoom_step: Option<f32>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            crop_zoom_min: default_crop_zoom_min(),
            crop_zoom_max: default_crop_zoom_max(),
            crop_zoom_step: default_crop_zoom_step(),
        }
    }
}

impl PanelConfig {
    /// Thumbnail size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u16 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Crop zoom slider range, always positive and containing `1.0`.
    #[must_use]
    pub fn crop_zoom_range(&self) -> (f32, f32) {
        let min = finite_or(self.crop_zoom_min, DEFAULT_CROP_ZOOM_MIN).clamp(CROP_ZOOM_FLOOR, 1.0);
        let max = finite_or(self.crop_zoom_max, DEFAULT_CROP_ZOOM_MAX).clamp(1.0, CROP_ZOOM_CEILING);
        (min, max)
    }

    /// Crop zoom slider step clamped to the supported range.
    #[must_use]
    pub fn crop_zoom_step(&self) -> f32 {
        finite_or(self.crop_zoom_step, DEFAULT_CROP_ZOOM_STEP)
            .clamp(MIN_CROP_ZOOM_STEP, MAX_CROP_ZOOM_STEP)
    }
}

/// Image library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibraryConfig {
    /// Root directory that relative attachment paths are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Shot panel settings.
    #[serde(default)]
    pub panel: PanelConfig,

    /// Image library settings.
    #[serde(default)]
    pub library: LibraryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_size() -> Option<u16> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_crop_zoom_min() -> Option<f32> {
    Some(DEFAULT_CROP_ZOOM_MIN)
}

fn default_crop_zoom_max() -> Option<f32> {
    Some(DEFAULT_CROP_ZOOM_MAX)
}

fn default_crop_zoom_step() -> Option<f32> {
    Some(DEFAULT_CROP_ZOOM_STEP)
}

fn finite_or(value: Option<f32>, fallback: f32) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration, to `base_dir` when given, else to the resolved
/// settings directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            panel: PanelConfig {
                thumbnail_size: Some(200),
                crop_zoom_min: Some(0.25),
                crop_zoom_max: Some(6.0),
                crop_zoom_step: Some(0.1),
            },
            library: LibraryConfig {
                root_dir: Some(PathBuf::from("/srv/shoots")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_parse_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[panel]\nthumbnail_size = \"big\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config::default();
        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.panel, PanelConfig::default());
        assert!(loaded.library.root_dir.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.panel.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(
            config.panel.crop_zoom_range(),
            (DEFAULT_CROP_ZOOM_MIN, DEFAULT_CROP_ZOOM_MAX)
        );
        assert_eq!(config.panel.crop_zoom_step(), DEFAULT_CROP_ZOOM_STEP);
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let panel = PanelConfig {
            thumbnail_size: Some(4),
            crop_zoom_min: Some(-3.0),
            crop_zoom_max: Some(500.0),
            crop_zoom_step: Some(f32::NAN),
        };
        assert_eq!(panel.thumbnail_size(), MIN_THUMBNAIL_SIZE);
        assert_eq!(panel.crop_zoom_range(), (CROP_ZOOM_FLOOR, CROP_ZOOM_CEILING));
        assert_eq!(panel.crop_zoom_step(), DEFAULT_CROP_ZOOM_STEP);
    }

    #[test]
    fn zoom_range_always_contains_neutral_zoom() {
        let panel = PanelConfig {
            crop_zoom_min: Some(2.0),
            crop_zoom_max: Some(0.5),
            ..PanelConfig::default()
        };
        let (min, max) = panel.crop_zoom_range();
        assert!(min <= 1.0 && 1.0 <= max);
    }
}
