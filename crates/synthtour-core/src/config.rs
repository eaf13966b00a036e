//! Configuration management for SynthTour.
//!
//! Loads configuration from `${SYNTHTOUR_HOME}/config.toml` with sensible
//! defaults. Only the tunable presentation knobs live here; the sequencer
//! timings the tour is designed around (transition length, auto-advance
//! period, cursor blink) are fixed constants in their modules.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Typing speeds for the data-showcase panel, in milliseconds per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Base speed for the query line.
    pub query_speed_ms: u64,
    /// Base speed for the first reasoning line (types a little slower,
    /// like someone settling in).
    pub first_line_speed_ms: u64,
    /// Base speed for the remaining reasoning lines.
    pub line_speed_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            query_speed_ms: 12,
            first_line_speed_ms: 20,
            line_speed_ms: 12,
        }
    }
}

impl TypingConfig {
    pub fn query_speed(&self) -> Duration {
        Duration::from_millis(self.query_speed_ms)
    }

    pub fn first_line_speed(&self) -> Duration {
        Duration::from_millis(self.first_line_speed_ms)
    }

    pub fn line_speed(&self) -> Duration {
        Duration::from_millis(self.line_speed_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typing: TypingConfig,
    /// Directory holding the screenshot text art. Relative paths resolve
    /// against the SynthTour home directory.
    pub art_dir: Option<PathBuf>,
}

impl Config {
    /// Loads the config file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }

    /// Writes the default config file if none exists. Returns its path.
    pub fn init() -> Result<PathBuf> {
        let path = paths::config_path();
        if path.exists() {
            return Ok(path);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(&Self::default()).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write config {}", path.display()))?;
        Ok(path)
    }

    /// Resolves the art directory: explicit setting (relative to the
    /// SynthTour home) or `<home>/art`.
    pub fn art_dir(&self) -> PathBuf {
        match &self.art_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => paths::synthtour_home().join(dir),
            None => paths::synthtour_home().join("art"),
        }
    }
}

/// Well-known filesystem locations.
pub mod paths {
    use std::path::PathBuf;

    /// Overrides the home directory for config, consent and logs.
    pub const HOME_ENV: &str = "SYNTHTOUR_HOME";

    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
    }

    pub fn synthtour_home() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return PathBuf::from(home);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".synthtour")
    }

    pub fn config_path() -> PathBuf {
        synthtour_home().join("config.toml")
    }

    pub fn consent_path() -> PathBuf {
        synthtour_home().join("consent.toml")
    }

    pub fn log_dir() -> PathBuf {
        synthtour_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(config.typing.query_speed_ms, 12);
        assert!(config.art_dir.is_none());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.typing.line_speed_ms = 25;
        config.art_dir = Some(PathBuf::from("/tmp/art"));
        std::fs::write(&path, toml::to_string_pretty(&config).expect("serialize"))
            .expect("write");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.typing.line_speed_ms, 25);
        assert_eq!(loaded.art_dir, Some(PathBuf::from("/tmp/art")));
        assert_eq!(loaded.art_dir(), PathBuf::from("/tmp/art"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[typing]\nquery_speed_ms = 30\n").expect("write");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.typing.query_speed_ms, 30);
        assert_eq!(loaded.typing.line_speed_ms, 12);
    }
}
