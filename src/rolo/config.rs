use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for rolo, stored as config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// File name of the contacts snapshot inside the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default number of records per page for `show all`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Page size guarded against a zero in a hand-edited file.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.data_file, "contacts.json");
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RoloConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = RoloConfig {
            data_file: "book.json".to_string(),
            page_size: 3,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = RoloConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let config = RoloConfig {
            data_file: default_data_file(),
            page_size: 0,
        };
        assert_eq!(config.effective_page_size(), 1);
    }
}
