//! Configuration management for Photo Transfer.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use phototransfer_core::config::{ConfigManager, ConfigSection};
//! use phototransfer_core::models::CollisionPolicy;
//!
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Destination: {}", config.settings().paths.destination_dir);
//!
//! config.settings_mut().transfer.collision_policy = CollisionPolicy::Skip;
//! config.update_section(ConfigSection::Transfer).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, LoggingSettings, PathSettings, ScanSettings, Settings, TransferSettings,
};
