//! Copy/move of selected names from the card to a destination folder.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::TransferSettings;
use crate::models::{CollisionPolicy, FailureReason, TransferMode};

use super::naming::{is_plain_name, partial_path, unique_target};
use super::types::{TransferError, TransferOptions, TransferReport, TransferredFile};
use super::verify::files_match;

/// What happened to a single name.
enum FileOutcome {
    Done(PathBuf),
    Skipped,
}

/// Runs copy/move batches.
///
/// Stateless apart from the policy it was built with; every file is
/// attempted independently and failures are collected, never raised.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use phototransfer_core::config::TransferSettings;
/// use phototransfer_core::models::TransferMode;
/// use phototransfer_core::transfer::TransferExecutor;
///
/// let executor = TransferExecutor::new(&TransferSettings::default());
/// let report = executor.execute(
///     TransferMode::Copy,
///     &["IMG_0001.JPG".to_string()],
///     Path::new("/media/card/DCIM/100CANON"),
///     Path::new("/home/me/Pictures"),
/// );
/// println!("{}", report.status_line());
/// ```
#[derive(Debug, Clone)]
pub struct TransferExecutor {
    policy: CollisionPolicy,
    verify_copies: bool,
}

impl TransferExecutor {
    pub fn new(settings: &TransferSettings) -> Self {
        Self {
            policy: settings.collision_policy,
            verify_copies: settings.verify_copies,
        }
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_copies = verify;
        self
    }

    /// Transfer `names` from `source_dir` into `dest_dir`.
    pub fn execute(
        &self,
        mode: TransferMode,
        names: &[String],
        source_dir: &Path,
        dest_dir: &Path,
    ) -> TransferReport {
        self.execute_with(mode, names, source_dir, dest_dir, &TransferOptions::default())
    }

    /// [`TransferExecutor::execute`] with progress, cancellation and a batch log.
    ///
    /// Duplicate names are attempted once. Cancellation is checked before
    /// each file; a file already in flight always completes.
    pub fn execute_with(
        &self,
        mode: TransferMode,
        names: &[String],
        source_dir: &Path,
        dest_dir: &Path,
        options: &TransferOptions,
    ) -> TransferReport {
        let mut seen = HashSet::new();
        let names: Vec<&String> = names.iter().filter(|n| seen.insert(n.as_str())).collect();
        let total = names.len();
        let logger = options.logger.as_deref();

        tracing::info!(
            "{} {} file(s) from {} to {} (collisions: {})",
            mode,
            total,
            source_dir.display(),
            dest_dir.display(),
            self.policy
        );
        if let Some(logger) = logger {
            logger.batch_started(mode, total, source_dir, dest_dir);
        }

        let mut report = TransferReport::new(mode);
        let dest_ready = dest_dir.is_dir();

        for (idx, name) in names.iter().enumerate() {
            if options.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
                report.cancelled = true;
                report
                    .not_attempted
                    .extend(names[idx..].iter().map(|n| n.to_string()));
                tracing::info!("Transfer cancelled at {}/{}", idx + 1, total);
                if let Some(logger) = logger {
                    logger.cancelled(total - idx);
                }
                break;
            }

            let result = if dest_ready {
                self.transfer_one(mode, name, source_dir, dest_dir)
            } else {
                Err(TransferError::new(
                    name.as_str(),
                    FailureReason::Other,
                    format!("destination {} is not a folder", dest_dir.display()),
                ))
            };

            match result {
                Ok(FileOutcome::Done(target)) => {
                    tracing::debug!("{} {} -> {}", mode.verb(), name, target.display());
                    if let Some(logger) = logger {
                        logger.file_succeeded(mode, name, &target);
                    }
                    report.succeeded.push(TransferredFile {
                        name: name.to_string(),
                        target,
                    });
                }
                Ok(FileOutcome::Skipped) => {
                    tracing::debug!("Skipped {}, already in destination", name);
                    if let Some(logger) = logger {
                        logger.file_skipped(name);
                    }
                    report.skipped.push(name.to_string());
                }
                Err(err) => {
                    tracing::warn!("Failed to {} {}: {} ({})", mode, name, err.reason, err.detail);
                    if let Some(logger) = logger {
                        logger.file_failed(name, err.reason, &err.detail);
                    }
                    report.failed.push(err);
                }
            }

            if let Some(progress) = &options.progress {
                progress(idx + 1, total, name);
            }
        }

        if let Some(logger) = logger {
            logger.summary(report.succeeded.len(), report.skipped.len(), report.failed.len());
        }
        tracing::info!("{}", report.status_line());
        report
    }

    fn transfer_one(
        &self,
        mode: TransferMode,
        name: &str,
        source_dir: &Path,
        dest_dir: &Path,
    ) -> Result<FileOutcome, TransferError> {
        if !is_plain_name(name) {
            return Err(TransferError::new(
                name,
                FailureReason::InvalidName,
                "not a plain file name",
            ));
        }

        let source = source_dir.join(name);
        fs::symlink_metadata(&source).map_err(|e| TransferError::from_io(name, &e))?;

        let target = match self.pick_target(name, &source, dest_dir)? {
            Some(target) => target,
            None => return Ok(FileOutcome::Skipped),
        };

        match mode {
            TransferMode::Copy => {
                copy_via_partial(&source, &target, false)
                    .map_err(|e| TransferError::from_io(name, &e))?;
                self.verify(name, &source, &target)?;
            }
            TransferMode::Move => self.move_file(name, &source, &target)?,
        }

        Ok(FileOutcome::Done(target))
    }

    /// Target path for `name`, or `None` when the skip policy applies.
    fn pick_target(
        &self,
        name: &str,
        source: &Path,
        dest_dir: &Path,
    ) -> Result<Option<PathBuf>, TransferError> {
        let target = dest_dir.join(name);
        let Ok(existing) = fs::symlink_metadata(&target) else {
            return Ok(Some(target));
        };

        if same_file(source, &target) {
            return Err(TransferError::new(
                name,
                FailureReason::Other,
                "source and destination are the same file",
            ));
        }

        match self.policy {
            CollisionPolicy::Skip => Ok(None),
            CollisionPolicy::Rename => Ok(Some(unique_target(dest_dir, name))),
            CollisionPolicy::Overwrite if existing.is_dir() => Err(TransferError::new(
                name,
                FailureReason::Other,
                "a folder with this name exists in the destination",
            )),
            CollisionPolicy::Overwrite => Ok(Some(target)),
        }
    }

    fn move_file(&self, name: &str, source: &Path, target: &Path) -> Result<(), TransferError> {
        match fs::rename(source, target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                // Card and destination live on different filesystems
                tracing::debug!("Cross-device move of {}, copying instead", name);
                copy_via_partial(source, target, true)
                    .map_err(|e| TransferError::from_io(name, &e))?;
                self.verify(name, source, target)?;
                fs::remove_file(source).map_err(|e| {
                    TransferError::new(
                        name,
                        FailureReason::from_io(&e),
                        format!("copied but could not remove original: {}", e),
                    )
                })
            }
            Err(e) => Err(TransferError::from_io(name, &e)),
        }
    }

    fn verify(&self, name: &str, source: &Path, target: &Path) -> Result<(), TransferError> {
        if !self.verify_copies {
            return Ok(());
        }

        match files_match(source, target) {
            Ok(true) => Ok(()),
            Ok(false) => {
                let _ = fs::remove_file(target);
                Err(TransferError::new(
                    name,
                    FailureReason::VerificationFailed,
                    "copy does not match the original",
                ))
            }
            Err(e) => {
                let _ = fs::remove_file(target);
                Err(TransferError::new(
                    name,
                    FailureReason::VerificationFailed,
                    format!("could not hash files: {}", e),
                ))
            }
        }
    }
}

/// Copy into a hidden `.part` sibling, then rename into place.
///
/// A failure part-way leaves `target` untouched.
fn copy_via_partial(source: &Path, target: &Path, keep_mtime: bool) -> io::Result<()> {
    let partial = partial_path(target);

    let result = fs::copy(source, &partial).and_then(|_| {
        if keep_mtime {
            let modified = fs::metadata(source)?.modified()?;
            fs::OpenOptions::new()
                .write(true)
                .open(&partial)?
                .set_modified(modified)?;
        }
        fs::rename(&partial, target)
    });

    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
