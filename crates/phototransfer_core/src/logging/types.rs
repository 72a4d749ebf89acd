//! Logging types and configuration.

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Type alias for GUI log callback function.
///
/// The callback receives each log line as a string.
pub type GuiLogCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Message prefix types for consistent formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePrefix {
    /// Batch header: `=== Copy 3 file(s) ===`
    Batch,
    /// `[OK]`
    Success,
    /// `[SKIP]`
    Skipped,
    /// `[FAIL]`
    Failure,
    /// `[SUMMARY]`
    Summary,
    None,
}

impl MessagePrefix {
    /// Format a message with this prefix.
    pub fn format(&self, message: &str) -> String {
        match self {
            MessagePrefix::Batch => format!("=== {} ===", message),
            MessagePrefix::Success => format!("[OK] {}", message),
            MessagePrefix::Skipped => format!("[SKIP] {}", message),
            MessagePrefix::Failure => format!("[FAIL] {}", message),
            MessagePrefix::Summary => format!("[SUMMARY] {}", message),
            MessagePrefix::None => message.to_string(),
        }
    }
}
