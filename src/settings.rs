//! Game settings
//!
//! Colors and loop options supplied by the host. Gameplay constants live in
//! `consts` and are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::{Rgba, colors};

/// Colors used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub paddle: Rgba,
    pub ball: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            paddle: colors::PADDLE,
            ball: colors::BALL,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,
    /// Ticks between frame rate log lines at debug level (0 = off)
    pub frame_stats_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            // ~5 seconds at 60 Hz
            frame_stats_interval: 300,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults if it can't be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "palette": { "ball": [1.0, 0.0, 0.0, 1.0] } }"#)
            .unwrap();

        assert_eq!(settings.palette.ball, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(settings.palette.paddle, colors::PADDLE);
        assert_eq!(settings.frame_stats_interval, 300);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.frame_stats_interval = 0;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json(r#"{ "palette": 3 }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/ping-pong-settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("ping-pong-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "frame_stats_interval": 60 }"#).unwrap();

        let settings = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.frame_stats_interval, 60);
        assert_eq!(settings.palette, Palette::default());
    }
}
