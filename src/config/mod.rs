// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[player]` - Initial volume and speed, skip amounts, gesture and overlay timings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = config.player.to_settings();
//! assert!(settings.skip_step.value() > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::player::{PlaybackSpeed, SkipStep, Volume};
use crate::error::Result;
use crate::player::PlayerSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Player behaviour settings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Initial volume (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Start muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Initial playback rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback_speed: Option<f64>,

    /// Seconds skipped by the rewind/forward buttons and double taps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_secs: Option<f64>,

    /// Seconds skipped by the left/right arrow keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_seek_secs: Option<f64>,

    /// Volume change per up/down arrow key press.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_volume_step: Option<f32>,

    /// Double-tap window in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_ms: Option<u64>,

    /// Controls auto-hide delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_timeout_ms: Option<u64>,

    /// Skip indicator display time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_indicator_ms: Option<u64>,
}

impl PlayerConfig {
    /// Resolves the optional keys into clamped controller settings.
    #[must_use]
    pub fn to_settings(&self) -> PlayerSettings {
        let millis = |value: Option<u64>, default: u64, min: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(default).clamp(min, max))
        };

        PlayerSettings {
            skip_step: SkipStep::new(self.skip_secs.unwrap_or(DEFAULT_SKIP_SECS)),
            keyboard_seek_step: SkipStep::new(
                self.keyboard_seek_secs
                    .unwrap_or(DEFAULT_KEYBOARD_SEEK_SECS),
            ),
            keyboard_volume_step: self
                .keyboard_volume_step
                .unwrap_or(DEFAULT_KEYBOARD_VOLUME_STEP)
                .clamp(MIN_KEYBOARD_VOLUME_STEP, MAX_KEYBOARD_VOLUME_STEP),
            double_tap_window: millis(
                self.double_tap_ms,
                DEFAULT_DOUBLE_TAP_MS,
                MIN_DOUBLE_TAP_MS,
                MAX_DOUBLE_TAP_MS,
            ),
            overlay_timeout: millis(
                self.overlay_timeout_ms,
                DEFAULT_OVERLAY_TIMEOUT_MS,
                MIN_OVERLAY_TIMEOUT_MS,
                MAX_OVERLAY_TIMEOUT_MS,
            ),
            skip_indicator_duration: millis(
                self.skip_indicator_ms,
                DEFAULT_SKIP_INDICATOR_MS,
                MIN_SKIP_INDICATOR_MS,
                MAX_SKIP_INDICATOR_MS,
            ),
        }
    }

    /// Initial volume, clamped.
    #[must_use]
    pub fn initial_volume(&self) -> Volume {
        Volume::new(self.volume.unwrap_or(DEFAULT_VOLUME))
    }

    /// Initial playback rate, snapped to the nearest preset.
    #[must_use]
    pub fn initial_speed(&self) -> PlaybackSpeed {
        PlaybackSpeed::nearest_preset(self.playback_speed.unwrap_or(DEFAULT_PLAYBACK_SPEED))
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player behaviour settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Failed to load {}: {err}. Using defaults.",
                path.display()
            )),
        ),
    }
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn default_settings_match_player_defaults() {
        let settings = PlayerConfig::default().to_settings();
        assert_eq!(settings, PlayerSettings::default());
    }

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[general]\nlanguage = \"fr\"\n\n[player]\nskip_secs = 15.0\ndouble_tap_ms = 250\n",
        )
        .expect("failed to write config");

        let config = load_from_path(&path).expect("config should load");
        assert_eq!(config.general.language.as_deref(), Some("fr"));

        let settings = config.player.to_settings();
        assert_abs_diff_eq!(settings.skip_step.value(), 15.0);
        assert_eq!(settings.double_tap_window, Duration::from_millis(250));
        assert_abs_diff_eq!(settings.keyboard_seek_step.value(), DEFAULT_KEYBOARD_SEEK_SECS);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = PlayerConfig {
            volume: Some(3.0),
            skip_secs: Some(1000.0),
            keyboard_volume_step: Some(0.0),
            double_tap_ms: Some(5),
            overlay_timeout_ms: Some(1_000_000),
            ..PlayerConfig::default()
        };
        let settings = config.to_settings();

        assert_abs_diff_eq!(config.initial_volume().value(), MAX_VOLUME);
        assert_abs_diff_eq!(settings.skip_step.value(), MAX_SKIP_SECS);
        assert_abs_diff_eq!(settings.keyboard_volume_step, MIN_KEYBOARD_VOLUME_STEP);
        assert_eq!(
            settings.double_tap_window,
            Duration::from_millis(MIN_DOUBLE_TAP_MS)
        );
        assert_eq!(
            settings.overlay_timeout,
            Duration::from_millis(MAX_OVERLAY_TIMEOUT_MS)
        );
    }

    #[test]
    fn initial_speed_snaps_to_preset() {
        let config = PlayerConfig {
            playback_speed: Some(1.3),
            ..PlayerConfig::default()
        };
        assert_abs_diff_eq!(config.initial_speed().value(), 1.25);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        let err = load_from_path(&path).expect_err("invalid toml should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[player\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
