use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COLLAPSED_ROWS: usize = 5;
const DEFAULT_SNAPSHOT_FILE: &str = "bookshelf.txt";

/// Configuration for shelfz, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// How many rows the collapsed view shows
    #[serde(default = "default_collapsed_rows")]
    pub collapsed_rows: usize,

    /// Fixed filename the snapshot export writes to
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

fn default_collapsed_rows() -> usize {
    DEFAULT_COLLAPSED_ROWS
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            collapsed_rows: DEFAULT_COLLAPSED_ROWS,
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "collapsed-rows" => Some(self.collapsed_rows.to_string()),
            "snapshot-file" => Some(self.snapshot_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "collapsed-rows" => {
                let rows: usize = value
                    .parse()
                    .map_err(|_| format!("collapsed-rows must be a number, got '{}'", value))?;
                if rows == 0 {
                    return Err("collapsed-rows must be at least 1".to_string());
                }
                self.collapsed_rows = rows;
                Ok(())
            }
            "snapshot-file" => {
                if value.is_empty() {
                    return Err("snapshot-file cannot be empty".to_string());
                }
                self.snapshot_file = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.collapsed_rows, 5);
        assert_eq!(config.snapshot_file, "bookshelf.txt");
    }

    #[test]
    fn test_set_collapsed_rows() {
        let mut config = ShelfConfig::default();
        config.set("collapsed-rows", "8").unwrap();
        assert_eq!(config.collapsed_rows, 8);

        assert!(config.set("collapsed-rows", "0").is_err());
        assert!(config.set("collapsed-rows", "abc").is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = ShelfConfig::default();
        assert!(config.set("nope", "1").is_err());
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShelfConfig::default();
        config.set("collapsed-rows", "3").unwrap();
        config.set("snapshot-file", "shelf.txt").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
