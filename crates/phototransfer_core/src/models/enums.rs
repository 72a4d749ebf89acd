//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Whether a transfer keeps or removes the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Byte-for-byte copy, original stays on the card.
    Copy,
    /// Original is removed from the card.
    Move,
}

impl TransferMode {
    /// Verb used in logs and status lines.
    pub fn verb(&self) -> &'static str {
        match self {
            TransferMode::Copy => "Copied",
            TransferMode::Move => "Moved",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferMode::Copy => write!(f, "copy"),
            TransferMode::Move => write!(f, "move"),
        }
    }
}

/// What to do when the destination already holds a file with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the existing file.
    #[default]
    Overwrite,
    /// Leave the existing file and record the name as skipped.
    Skip,
    /// Pick a free name: `stem (1).ext`, `stem (2).ext`, ...
    Rename,
}

impl CollisionPolicy {
    /// All variants, in the order shown in pickers.
    pub const ALL: [CollisionPolicy; 3] = [
        CollisionPolicy::Overwrite,
        CollisionPolicy::Skip,
        CollisionPolicy::Rename,
    ];
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "Overwrite"),
            CollisionPolicy::Skip => write!(f, "Skip"),
            CollisionPolicy::Rename => write!(f, "Rename"),
        }
    }
}

/// Why a single file could not be transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    PermissionDenied,
    MissingSource,
    DiskFull,
    /// Name was empty, contained a separator, or pointed outside the source.
    InvalidName,
    /// Copied bytes did not hash to the same value as the original.
    VerificationFailed,
    Other,
}

impl FailureReason {
    /// Classify an I/O error.
    pub fn from_io(err: &std::io::Error) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => FailureReason::MissingSource,
            ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
                FailureReason::PermissionDenied
            }
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => FailureReason::DiskFull,
            _ => FailureReason::Other,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::PermissionDenied => write!(f, "permission denied"),
            FailureReason::MissingSource => write!(f, "missing source"),
            FailureReason::DiskFull => write!(f, "disk full"),
            FailureReason::InvalidName => write!(f, "invalid name"),
            FailureReason::VerificationFailed => write!(f, "verification failed"),
            FailureReason::Other => write!(f, "I/O error"),
        }
    }
}
