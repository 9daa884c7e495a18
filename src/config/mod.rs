//! Configuration loading and management

mod settings;

pub use settings::{GuiSettings, RefreshSettings, SourceKind, SourceSettings, StorageSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "nikki-tracker";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub refresh: RefreshSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Default config location: `<config_dir>/nikki-tracker/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path`, or return defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Local storage file for completion state
    pub fn storage_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("local_storage.json")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.source.kind, SourceKind::Static);
        assert_eq!(config.refresh.interval_secs, 300);
        assert!(config.storage.persist);
        assert_eq!(config.source.file, PathBuf::from("mira_levels.csv"));
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [source]
            kind = "http"
            url = "https://example.com/sheet.csv"

            [storage]
            persist = false
            "#,
        )
        .unwrap();
        assert_eq!(config.source.kind, SourceKind::Http);
        assert_eq!(config.source.url, "https://example.com/sheet.csv");
        assert_eq!(config.source.http_timeout_secs, 30);
        assert!(!config.storage.persist);
        assert_eq!(config.refresh.interval_secs, 300);
    }

    #[test]
    fn test_unknown_source_kind_is_rejected() {
        assert!(toml::from_str::<Config>("[source]\nkind = \"ftp\"\n").is_err());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config: Config = toml::from_str("[refresh]\ninterval_secs = 0\n").unwrap();
        assert_eq!(config.refresh.interval(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.source.kind = SourceKind::File;
        config.storage.path = Some(dir.path().join("storage.json"));
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.source.kind, SourceKind::File);
        assert_eq!(loaded.storage_path(), dir.path().join("storage.json"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.source.kind, SourceKind::Static);
    }
}
