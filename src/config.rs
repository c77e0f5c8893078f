//! Configuration management
//!
//! Display preferences and the progress file location, stored as TOML in the
//! platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::progress::{PersistenceError, ProgressStore};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Use colours when stdout is a terminal
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the screen between menu and lesson views
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

/// Progress file settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Overrides `~/.dsa_visualizer_progress`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is created with defaults. A file that can't be read or
    /// parsed, or no config directory at all, is reported and defaults are
    /// used for this run.
    pub fn load() -> Self {
        Self::load_at(config_path())
    }

    fn load_at(location: Result<PathBuf>) -> Self {
        match location {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("{:#}; using default settings", e);
                Config::default()
            }
        }
    }

    /// Load from `path`, writing defaults there if nothing exists yet
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let config = Config::default();
            if let Err(e) = config.save_to(path) {
                warn!("Could not write default config: {:#}", e);
            }
            return config;
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using default settings", e);
                Config::default()
            }
        }
    }

    /// Load from `path`, failing on any read or parse error
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "dsa-visualizer", "dsa-visualizer")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Colour is on unless disabled by flag, config or `NO_COLOR`
pub fn color_enabled(config: &Config, no_color_flag: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    config.display.color && !no_color_flag && !no_color_env
}

/// Progress file: explicit override, then config, then the home default
pub fn resolve_progress_path(cli_override: Option<&Path>, config: &Config) -> Result<PathBuf, PersistenceError> {
    if let Some(path) = cli_override {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.progress.file {
        return Ok(path.clone());
    }
    crate::progress::default_path()
}

/// Store at the resolved progress path
///
/// Without any usable location the store is unavailable: the session still
/// runs, progress shows as empty and every save reports a warning.
pub fn progress_store(cli_override: Option<&Path>, config: &Config) -> ProgressStore {
    match resolve_progress_path(cli_override, config) {
        Ok(path) => {
            debug!("Using progress file {}", path.display());
            ProgressStore::new(path)
        }
        Err(e) => {
            warn!("{}; progress will not be saved", e);
            ProgressStore::unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.color);
        assert!(config.display.clear_screen);
        assert!(config.progress.file.is_none());
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncolor = false\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(!config.display.color);
        assert!(config.display.clear_screen);
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "display = [").unwrap();
        assert!(Config::load_from(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_round_trip_progress_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.progress.file = Some(PathBuf::from("/tmp/progress"));
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_progress_path_precedence() {
        let mut config = Config::default();
        config.progress.file = Some(PathBuf::from("/from/config"));

        let cli = PathBuf::from("/from/cli");
        assert_eq!(resolve_progress_path(Some(&cli), &config).unwrap(), cli);
        assert_eq!(resolve_progress_path(None, &config).unwrap(), PathBuf::from("/from/config"));
    }

    #[test]
    fn test_no_config_directory_uses_defaults() {
        let config = Config::load_at(Err(anyhow::anyhow!("Failed to get project directories")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_progress_file_needs_no_home() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress");
        let store = progress_store(Some(&path), &Config::default());
        assert_eq!(store.path(), Some(path.as_path()));
        store.mark_completed("2.1").unwrap();
        assert!(store.load().contains("2.1"));
    }

    #[test]
    fn test_color_flag_overrides_config() {
        let config = Config::default();
        assert!(!color_enabled(&config, true));
    }
}
