use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Theme;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Simulated network latency of the mock services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Lower bound for entity operations in milliseconds (default: 500).
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,
    /// Upper bound for entity operations in milliseconds (default: 800).
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
    /// Login delay in milliseconds (default: 1000).
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    /// Registration delay in milliseconds (default: 1000).
    #[serde(default = "default_register_ms")]
    pub register_ms: u64,
    /// Logout delay in milliseconds (default: 500).
    #[serde(default = "default_logout_ms")]
    pub logout_ms: u64,
}

/// Where the local key-value storage lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. `None` means the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Initial table and theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Theme used when nothing is stored yet (default: light).
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_min_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    800
}

fn default_login_ms() -> u64 {
    1000
}

fn default_register_ms() -> u64 {
    1000
}

fn default_logout_ms() -> u64 {
    500
}

fn default_page_size() -> usize {
    5
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
            login_ms: default_login_ms(),
            register_ms: default_register_ms(),
            logout_ms: default_logout_ms(),
        }
    }
}

impl LatencyConfig {
    /// All delays disabled.
    pub fn zero() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
            login_ms: 0,
            register_ms: 0,
            logout_ms: 0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_theme: Theme::default(),
        }
    }
}

impl StorageConfig {
    /// Resolve the storage file path.
    ///
    /// Uses `~/.local/share/staffdesk/storage.json` on Linux, or the equivalent
    /// data directory elsewhere via `dirs::data_dir()`. Falls back to the
    /// current directory if no data directory is known.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("staffdesk").join("storage.json")
        })
    }
}
