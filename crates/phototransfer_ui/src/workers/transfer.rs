//! Transfer worker - runs a copy or move batch off the UI thread
//!
//! Progress and log lines are written into shared state that the UI polls.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use phototransfer_core::config::TransferSettings;
use phototransfer_core::logging::{GuiLogCallback, TransferLogger};
use phototransfer_core::models::TransferMode;
use phototransfer_core::transfer::{
    CancelHandle, ProgressCallback, TransferExecutor, TransferOptions, TransferReport,
};

/// Worker state the UI reads on each poll.
#[derive(Debug, Default)]
pub struct TransferProgress {
    pub done: usize,
    pub total: usize,
    pub current: String,
    /// Log lines not yet shown in the UI.
    pub pending_log: Vec<String>,
}

impl TransferProgress {
    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_log)
    }
}

/// Handle the UI keeps while a batch is in flight.
pub struct RunningTransfer {
    pub mode: TransferMode,
    pub cancel: CancelHandle,
    pub progress: Arc<Mutex<TransferProgress>>,
}

/// Everything a batch needs, captured when the button is pressed.
pub struct TransferJob {
    pub mode: TransferMode,
    pub names: Vec<String>,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub settings: TransferSettings,
    /// Where the per-batch log goes; `None` keeps it in the UI only.
    pub log_dir: Option<PathBuf>,
    pub cancel: CancelHandle,
    pub progress: Arc<Mutex<TransferProgress>>,
}

impl TransferJob {
    /// Handle for the UI side of this job.
    pub fn handle(&self) -> RunningTransfer {
        RunningTransfer {
            mode: self.mode,
            cancel: self.cancel.clone(),
            progress: Arc::clone(&self.progress),
        }
    }

    /// Run the batch on the current thread.
    pub fn execute(self) -> TransferReport {
        {
            let mut progress = self.progress.lock();
            progress.done = 0;
            progress.total = self.names.len();
        }

        let log_progress = Arc::clone(&self.progress);
        let gui_callback: GuiLogCallback = Box::new(move |line| {
            log_progress.lock().pending_log.push(line.to_string());
        });

        let logger = match &self.log_dir {
            Some(dir) => match TransferLogger::new(dir, Some(gui_callback)) {
                Ok(logger) => logger,
                Err(e) => {
                    tracing::warn!("Cannot create transfer log in {}: {}", dir.display(), e);
                    let fallback_progress = Arc::clone(&self.progress);
                    TransferLogger::without_file(Some(Box::new(move |line| {
                        fallback_progress.lock().pending_log.push(line.to_string());
                    })))
                }
            },
            None => TransferLogger::without_file(Some(gui_callback)),
        };
        let logger = Arc::new(logger);

        let step_progress = Arc::clone(&self.progress);
        let on_progress: ProgressCallback = Box::new(move |done, total, name| {
            let mut progress = step_progress.lock();
            progress.done = done;
            progress.total = total;
            progress.current = name.to_string();
        });

        let options = TransferOptions {
            progress: Some(on_progress),
            cancel: Some(self.cancel.clone()),
            logger: Some(Arc::clone(&logger)),
        };

        let report = TransferExecutor::new(&self.settings).execute_with(
            self.mode,
            &self.names,
            &self.source_dir,
            &self.dest_dir,
            &options,
        );

        if let Some(path) = logger.log_path() {
            self.progress
                .lock()
                .pending_log
                .push(format!("Transfer log: {}", path.display()));
        }
        logger.close();

        report
    }
}

/// Run a transfer batch (async wrapper).
pub async fn run_transfer(job: TransferJob) -> Result<TransferReport, String> {
    tokio::task::spawn_blocking(move || job.execute())
        .await
        .map_err(|e| format!("Transfer task failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn job(mode: TransferMode, src: &std::path::Path, dst: &std::path::Path) -> TransferJob {
        TransferJob {
            mode,
            names: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            source_dir: src.to_path_buf(),
            dest_dir: dst.to_path_buf(),
            settings: TransferSettings::default(),
            log_dir: None,
            cancel: CancelHandle::new(),
            progress: Arc::new(Mutex::new(TransferProgress::default())),
        }
    }

    #[test]
    fn execute_reports_progress_and_log_lines() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("a.jpg"), b"aaa").unwrap();
        fs::write(src.path().join("b.jpg"), b"bbb").unwrap();

        let job = job(TransferMode::Copy, src.path(), dst.path());
        let handle = job.handle();
        let report = job.execute();

        assert!(report.is_clean());
        assert_eq!(report.succeeded_names(), vec!["a.jpg", "b.jpg"]);

        let mut progress = handle.progress.lock();
        assert_eq!((progress.done, progress.total), (2, 2));
        let lines = progress.take_log();
        assert!(lines.iter().any(|l| l.contains("[OK] Copied a.jpg")));
        assert!(lines.iter().any(|l| l.contains("[SUMMARY]")));
        assert!(progress.pending_log.is_empty());
    }

    #[test]
    fn cancelled_before_start_touches_nothing() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("a.jpg"), b"aaa").unwrap();
        fs::write(src.path().join("b.jpg"), b"bbb").unwrap();

        let job = job(TransferMode::Move, src.path(), dst.path());
        job.cancel.cancel();
        let report = job.execute();

        assert!(report.cancelled);
        assert_eq!(report.not_attempted, vec!["a.jpg", "b.jpg"]);
        assert!(src.path().join("a.jpg").exists());
        assert!(!dst.path().join("a.jpg").exists());
    }

    #[test]
    fn log_dir_receives_batch_file() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let logs = tempdir().unwrap();
        fs::write(src.path().join("a.jpg"), b"aaa").unwrap();

        let mut job = job(TransferMode::Copy, src.path(), dst.path());
        job.names = vec!["a.jpg".to_string()];
        job.log_dir = Some(logs.path().to_path_buf());
        job.execute();

        let files: Vec<_> = fs::read_dir(logs.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("transfer_"));
    }
}
