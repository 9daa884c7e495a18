//! Configuration section types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where level data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in Mira Level table
    #[default]
    Static,
    /// CSV export fetched over HTTP
    Http,
    /// CSV file on local disk
    File,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Static => write!(f, "static"),
            SourceKind::Http => write!(f, "http"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

/// Level data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,

    /// Spreadsheet CSV export URL (used when kind = "http")
    #[serde(default)]
    pub url: String,

    /// CSV file path (used when kind = "file")
    #[serde(default = "default_source_file")]
    pub file: PathBuf,

    /// HTTP request timeout in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_source_file() -> PathBuf {
    PathBuf::from("mira_levels.csv")
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            url: String::new(),
            file: default_source_file(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

/// Periodic refresh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSettings {
    /// Seconds between sheet refreshes (default: 300)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    5 * 60
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        // A zero interval would spin the refresh worker
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Completion state persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Write checked state to local storage on every change
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Local storage file (defaults to the platform data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_persist() -> bool {
    true
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            path: None,
        }
    }
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    820.0
}

fn default_window_height() -> f32 {
    720.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}
