//! TOML-based user preferences.
//!
//! Stores:
//! - `theme`: light or dark
//! - `points_per_day`: daily goal used to normalize heatmap colors
//! - `font`: font family applied by the UI layer
//!
//! Serialized to/from `<data_dir>/config.toml`. Defaults apply when the
//! file is absent; `load_or_default` also covers an unparseable one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

use super::data_dir;

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_points_per_day")]
    pub points_per_day: u32,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_points_per_day() -> u32 {
    10
}
fn default_font() -> String {
    "Sans Serif".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            points_per_day: default_points_per_day(),
            font: default_font(),
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, SettingsError> {
        let dir = data_dir().map_err(|e| SettingsError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// default settings cannot be written to disk.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file writes and returns
    /// defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| SettingsError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                let settings = Self::default();
                settings.save_to(path)?;
                Ok(settings)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to the default location.
    ///
    /// # Errors
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self).map_err(|e| SettingsError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| SettingsError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get a settings value as a display string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "theme" => Some(
                match self.theme {
                    Theme::Light => "light",
                    Theme::Dark => "dark",
                }
                .to_string(),
            ),
            "points_per_day" => Some(self.points_per_day.to_string()),
            "font" => Some(self.font.clone()),
            _ => None,
        }
    }

    /// Set a settings value by key, in memory only.
    ///
    /// # Errors
    /// Returns an error for unknown keys or unparseable values; the
    /// settings are unchanged in that case.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key {
            "theme" => {
                self.theme = match value {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => {
                        return Err(SettingsError::InvalidValue {
                            key: key.to_string(),
                            message: "expected 'light' or 'dark'".to_string(),
                        })
                    }
                };
            }
            "points_per_day" => {
                self.points_per_day =
                    value.parse().map_err(|_| SettingsError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as a non-negative integer"),
                    })?;
            }
            "font" => self.font = value.to_string(),
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let parsed: Settings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.points_per_day, 10);
        assert_eq!(parsed.font, "Sans Serif");
    }

    #[test]
    fn get_recognized_keys() {
        let settings = Settings::default();
        assert_eq!(settings.get("theme").as_deref(), Some("light"));
        assert_eq!(settings.get("points_per_day").as_deref(), Some("10"));
        assert_eq!(settings.get("font").as_deref(), Some("Sans Serif"));
        assert!(settings.get("volume").is_none());
    }

    #[test]
    fn apply_updates_each_key() {
        let mut settings = Settings::default();
        settings.apply("theme", "dark").unwrap();
        settings.apply("points_per_day", "25").unwrap();
        settings.apply("font", "Inter").unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.points_per_day, 25);
        assert_eq!(settings.font, "Inter");
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut settings = Settings::default();
        let err = settings.apply("volume", "11").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey(_)));
    }

    #[test]
    fn apply_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.apply("theme", "sepia").is_err());
        assert!(settings.apply("points_per_day", "-1").is_err());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "points_per_day = \"lots\"").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
