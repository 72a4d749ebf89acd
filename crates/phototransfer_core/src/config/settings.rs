//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::{CollisionPolicy, RecencyWindow};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Destination root, source pattern, logs folder.
    #[serde(default)]
    pub paths: PathSettings,

    /// Source scanning.
    #[serde(default)]
    pub scan: ScanSettings,

    /// Copy/move behavior.
    #[serde(default)]
    pub transfer: TransferSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Root of the destination tree.
    #[serde(default = "default_destination_dir")]
    pub destination_dir: String,

    /// Glob locating the camera card, first matching directory wins.
    #[serde(default = "default_source_dir_pattern")]
    pub source_dir_pattern: String,

    /// Folder for application and transfer logs.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_destination_dir() -> String {
    "Pictures".to_string()
}

#[cfg(windows)]
fn default_source_dir_pattern() -> String {
    "E:\\DCIM\\*".to_string()
}

#[cfg(not(windows))]
fn default_source_dir_pattern() -> String {
    "/media/*/*/DCIM/*".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            destination_dir: default_destination_dir(),
            source_dir_pattern: default_source_dir_pattern(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Source scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Window shown in the day input when the app starts.
    #[serde(default)]
    pub default_window_days: RecencyWindow,

    /// List dot-files found on the card.
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            default_window_days: RecencyWindow::default(),
            include_hidden: true,
        }
    }
}

/// Transfer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferSettings {
    /// What to do with a name that already exists in the destination.
    #[serde(default)]
    pub collision_policy: CollisionPolicy,

    /// Hash source and copy after each copy and drop mismatching copies.
    #[serde(default)]
    pub verify_copies: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Write one log file per copy/move batch.
    #[serde(default = "default_true")]
    pub keep_transfer_logs: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            keep_transfer_logs: true,
        }
    }
}

/// Identifies a config section for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Scan,
    Transfer,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Scan,
        ConfigSection::Transfer,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Scan => "scan",
            ConfigSection::Transfer => "transfer",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in a fresh config file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Destination root, camera card pattern, and logs",
            ConfigSection::Scan => "# Source list filtering",
            ConfigSection::Transfer => "# Copy/move behavior (collision_policy: overwrite | skip | rename)",
            ConfigSection::Logging => "# Logging configuration",
        }
    }
}
