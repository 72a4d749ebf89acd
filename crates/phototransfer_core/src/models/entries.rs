//! Source and destination values passed between the core and the UI.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where the source files live, resolved fresh before every scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// An existing directory.
    Available(PathBuf),
    /// Nothing matched the configured pattern.
    Unavailable {
        /// Pattern that was searched, shown in the warning dialog.
        pattern: String,
    },
}

impl SourceLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceLocation::Available(path) => Some(path),
            SourceLocation::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SourceLocation::Available(_))
    }
}

/// One entry found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Name relative to the source directory.
    pub name: String,
    pub modified: SystemTime,
    pub size: u64,
    pub is_dir: bool,
    /// Checked in the source list. Always false on a fresh scan.
    pub selected: bool,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, modified: SystemTime, size: u64, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            modified,
            size,
            is_dir,
            selected: false,
        }
    }

    /// Modification time formatted for display.
    pub fn modified_label(&self) -> String {
        let local: chrono::DateTime<chrono::Local> = self.modified.into();
        local.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Human readable size (`1.5 MB`).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
