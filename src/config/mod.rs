//! TOML configuration for latency, storage location and view defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LatencyConfig, StorageConfig, ViewConfig};
