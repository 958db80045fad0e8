//! Window settings persisted across sessions.
//!
//! Three scalars, loaded once at startup and saved once at shutdown. Loading
//! never fails: a missing file, unreadable JSON, or a value of the wrong
//! type falls back to that key's documented default silently.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_X: i32 = 240;
pub const DEFAULT_WINDOW_Y: i32 = 35;
pub const DEFAULT_SHOW: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub window_x: i32,
    pub window_y: i32,
    pub show: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            window_x: DEFAULT_WINDOW_X,
            window_y: DEFAULT_WINDOW_Y,
            show: DEFAULT_SHOW,
        }
    }
}

impl WindowSettings {
    /// Loads settings from `path`, falling back per key.
    pub fn load(path: &Path) -> Self {
        let defaults = Self::default();
        let Ok(text) = std::fs::read_to_string(path) else {
            return defaults;
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) else {
            tracing::warn!(path = %path.display(), "settings file unreadable, using defaults");
            return defaults;
        };
        Self {
            window_x: int_or(&value, "window_x", defaults.window_x),
            window_y: int_or(&value, "window_y", defaults.window_y),
            show: value
                .get("show")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(defaults.show),
        }
    }

    /// Writes settings to `path`. Called once at shutdown.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("serializing window settings")?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }
}

fn int_or(value: &serde_json::Value, key: &str, default: i32) -> i32 {
    value
        .get(key)
        .and_then(serde_json::Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_documented_values() {
        let settings = WindowSettings::default();
        assert_eq!(settings.window_x, 240);
        assert_eq!(settings.window_y, 35);
        assert!(settings.show);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = WindowSettings::load(Path::new("/no/such/settings.json"));
        assert_eq!(settings, WindowSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = WindowSettings {
            window_x: 12,
            window_y: -7,
            show: false,
        };
        settings.save(&path).unwrap();
        assert_eq!(WindowSettings::load(&path), settings);
    }

    #[test]
    fn malformed_value_falls_back_per_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"window_x": "not a number", "window_y": 99, "show": false}}"#
        )
        .unwrap();

        let settings = WindowSettings::load(file.path());
        assert_eq!(settings.window_x, DEFAULT_WINDOW_X);
        assert_eq!(settings.window_y, 99);
        assert!(!settings.show);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ this is not json").unwrap();
        assert_eq!(WindowSettings::load(file.path()), WindowSettings::default());
    }
}
