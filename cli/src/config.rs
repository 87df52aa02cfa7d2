// Configuration management for the Scrollback CLI
//
// Cross-platform config stored in:
// - macOS: ~/.config/scrollback/config.json
// - Linux: ~/.config/scrollback/config.json
// - Windows: %APPDATA%\scrollback\config.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the transcript database lives; defaults to the platform data dir
    pub storage_path: Option<String>,

    /// Slot key the transcript is stored under
    pub storage_key: String,

    /// How many messages `show` prints by default
    pub display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: scrollback_core::DEFAULT_STORAGE_KEY.to_string(),
            display_limit: 20,
        }
    }
}

impl Config {
    /// Get the config directory path (cross-platform)
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("scrollback");

        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        Ok(config_dir)
    }

    /// Get the data directory path (cross-platform)
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Failed to determine data directory")?
            .join("scrollback");

        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            let config: Config =
                serde_json::from_str(&contents).context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;
        Ok(())
    }

    /// Resolve the transcript database path
    pub fn resolved_storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(Self::data_dir()?.join("transcript")),
        }
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "storage_path" => self.storage_path.clone(),
            "storage_key" => Some(self.storage_key.clone()),
            "display_limit" => Some(self.display_limit.to_string()),
            _ => None,
        }
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage_path" => self.storage_path = Some(value.to_string()),
            "storage_key" => {
                anyhow::ensure!(!value.is_empty(), "storage_key cannot be empty");
                self.storage_key = value.to_string();
            }
            "display_limit" => {
                self.display_limit = value
                    .parse()
                    .context("display_limit must be a non-negative integer")?;
            }
            other => anyhow::bail!("Unknown config key: {}", other),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "wce_emulator_chats");
        assert_eq!(config.display_limit, 20);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = Config::default();

        config.set_value("storage_key", "my_chats").unwrap();
        assert_eq!(config.get_value("storage_key"), Some("my_chats".to_string()));

        config.set_value("display_limit", "50").unwrap();
        assert_eq!(config.display_limit, 50);

        assert!(config.set_value("display_limit", "lots").is_err());
        assert!(config.set_value("no_such_key", "x").is_err());
        assert!(config.set_value("storage_key", "").is_err());
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.set_value("storage_key", "side_chat").unwrap();
        config.set_value("display_limit", "5").unwrap();
        config.save_to(&path).unwrap();

        let restored = Config::load_from(&path).unwrap();
        assert_eq!(restored.storage_key, "side_chat");
        assert_eq!(restored.display_limit, 5);
        assert!(restored.storage_path.is_none());
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage_key, scrollback_core::DEFAULT_STORAGE_KEY);
        assert!(path.exists(), "first load should create the default config");
    }

    #[test]
    fn test_explicit_storage_path_wins() {
        let mut config = Config::default();
        config.storage_path = Some("/tmp/custom-transcript".to_string());
        assert_eq!(
            config.resolved_storage_path().unwrap(),
            PathBuf::from("/tmp/custom-transcript")
        );
    }
}
