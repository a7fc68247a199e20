//! Session settings
//!
//! Read once at startup from a JSON file; anything missing falls back to
//! the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{ANSWER_DURATION_SECS, DEFAULT_TICK_HZ, MAX_ANSWER_SECS};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "JIMOKWANG_SETTINGS";
/// Settings file used when the variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the roster document lives
    pub roster_path: PathBuf,
    /// Seconds a player gets to answer
    pub answer_secs: f32,
    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,
    /// Frontend frame rate while the wheel spins
    pub tick_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("data").join("players.json"),
            answer_secs: ANSWER_DURATION_SECS,
            seed: None,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl Settings {
    /// Path from `JIMOKWANG_SETTINGS`, or `settings.json`
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from a JSON file, using defaults if it is missing or invalid
    pub fn load(path: &Path) -> Self {
        let settings = match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Clamp values the game can't run with
    fn sanitized(mut self) -> Self {
        if !self.answer_secs.is_finite() || self.answer_secs <= 0.0 {
            log::warn!("answer_secs {} is invalid, using default", self.answer_secs);
            self.answer_secs = ANSWER_DURATION_SECS;
        } else if self.answer_secs > MAX_ANSWER_SECS {
            log::warn!("answer_secs {} is too long, capping at {}", self.answer_secs, MAX_ANSWER_SECS);
            self.answer_secs = MAX_ANSWER_SECS;
        }
        self.tick_hz = self.tick_hz.clamp(1, 240);
        self
    }

    /// Interval between frames
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_hz as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.answer_secs, 10.0);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"seed": 7, "roster_path": "players.json"}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.roster_path, PathBuf::from("players.json"));
        assert_eq!(settings.tick_hz, DEFAULT_TICK_HZ);
    }

    #[test]
    fn test_invalid_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"answer_secs": -3.0, "tick_hz": 0}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.answer_secs, ANSWER_DURATION_SECS);
        assert_eq!(settings.tick_hz, 1);
    }

    #[test]
    fn test_huge_answer_secs_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"answer_secs": 1e30}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.answer_secs, MAX_ANSWER_SECS);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "answer_secs = 5").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
