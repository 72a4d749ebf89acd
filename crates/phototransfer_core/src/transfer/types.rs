//! Transfer results, cancellation and progress plumbing.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::logging::TransferLogger;
use crate::models::{FailureReason, TransferMode};

/// Progress callback type.
///
/// Arguments: (files_done, files_total, name_just_finished)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Handle for stopping a running batch between files.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The file in flight finishes; the rest are not attempted.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Optional hooks for [`TransferExecutor::execute_with`](super::TransferExecutor::execute_with).
#[derive(Default)]
pub struct TransferOptions {
    pub progress: Option<ProgressCallback>,
    pub cancel: Option<CancelHandle>,
    pub logger: Option<Arc<TransferLogger>>,
}

/// A single file that could not be transferred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: {reason} ({detail})")]
pub struct TransferError {
    pub name: String,
    pub reason: FailureReason,
    pub detail: String,
}

impl TransferError {
    pub fn new(name: impl Into<String>, reason: FailureReason, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason,
            detail: detail.into(),
        }
    }

    pub fn from_io(name: impl Into<String>, err: &std::io::Error) -> Self {
        Self::new(name, FailureReason::from_io(err), err.to_string())
    }
}

/// A file that reached the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferredFile {
    pub name: String,
    /// Final path; differs from `dest/name` under the rename policy.
    pub target: PathBuf,
}

/// Outcome of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub mode: TransferMode,
    pub succeeded: Vec<TransferredFile>,
    /// Left alone because the destination already had the name.
    pub skipped: Vec<String>,
    pub failed: Vec<TransferError>,
    /// Names never tried because the batch was cancelled.
    pub not_attempted: Vec<String>,
    pub cancelled: bool,
}

impl TransferReport {
    pub fn new(mode: TransferMode) -> Self {
        Self {
            mode,
            succeeded: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            not_attempted: Vec::new(),
            cancelled: false,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && !self.cancelled
    }

    pub fn succeeded_names(&self) -> Vec<&str> {
        self.succeeded.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn failure_for(&self, name: &str) -> Option<&TransferError> {
        self.failed.iter().find(|f| f.name == name)
    }

    /// One-line status, e.g. `Copied 3, skipped 1, failed 2`.
    pub fn status_line(&self) -> String {
        let mut line = format!("{} {}", self.mode.verb(), self.succeeded.len());
        if !self.skipped.is_empty() {
            line.push_str(&format!(", skipped {}", self.skipped.len()));
        }
        if !self.failed.is_empty() {
            line.push_str(&format!(", failed {}", self.failed.len()));
        }
        if self.cancelled {
            line.push_str(&format!(", cancelled ({} not attempted)", self.not_attempted.len()));
        }
        line
    }

    /// Multi-line failure summary for the post-batch dialog.
    pub fn failure_summary(&self) -> String {
        self.failed
            .iter()
            .map(|f| format!("{}: {}", f.name, f.reason))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_handle_is_shared() {
        let handle = CancelHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_cancelled());
        clone.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn status_line_mentions_problems() {
        let mut report = TransferReport::new(TransferMode::Move);
        report.succeeded.push(TransferredFile {
            name: "a.jpg".into(),
            target: "/d/a.jpg".into(),
        });
        assert_eq!(report.status_line(), "Moved 1");
        assert!(report.is_clean());

        report
            .failed
            .push(TransferError::new("b.jpg", FailureReason::DiskFull, "no space"));
        assert_eq!(report.status_line(), "Moved 1, failed 1");
        assert_eq!(report.failure_summary(), "b.jpg: disk full");
        assert!(!report.is_clean());
    }
}
