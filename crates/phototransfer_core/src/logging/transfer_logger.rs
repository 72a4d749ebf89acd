//! Per-batch transfer logger with file and callback output.
//!
//! Each copy/move batch gets its own logger that:
//! - Writes to a dedicated log file (optional)
//! - Sends lines to a GUI callback (if provided)

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::types::{GuiLogCallback, LogLevel, MessagePrefix};
use crate::models::{FailureReason, TransferMode};

/// Per-batch logger with dual output (file + GUI).
pub struct TransferLogger {
    log_path: Option<PathBuf>,
    file_writer: Mutex<Option<BufWriter<File>>>,
    gui_callback: Option<GuiLogCallback>,
}

impl TransferLogger {
    /// Create a logger writing `transfer_<timestamp>.log` into `log_dir`.
    pub fn new(log_dir: impl AsRef<Path>, gui_callback: Option<GuiLogCallback>) -> std::io::Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S%3f");
        let log_path = log_dir.join(format!("transfer_{}.log", stamp));
        let file = File::create(&log_path)?;

        Ok(Self {
            log_path: Some(log_path),
            file_writer: Mutex::new(Some(BufWriter::new(file))),
            gui_callback,
        })
    }

    /// Logger that only feeds the callback, no file.
    pub fn without_file(gui_callback: Option<GuiLogCallback>) -> Self {
        Self {
            log_path: None,
            file_writer: Mutex::new(None),
            gui_callback,
        }
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    pub fn batch_started(&self, mode: TransferMode, count: usize, source: &Path, dest: &Path) {
        let header = format!("{} {} file(s)", capitalize(&mode.to_string()), count);
        self.log(LogLevel::Info, &MessagePrefix::Batch.format(&header));
        self.log(LogLevel::Info, &format!("From: {}", source.display()));
        self.log(LogLevel::Info, &format!("To:   {}", dest.display()));
    }

    pub fn file_succeeded(&self, mode: TransferMode, name: &str, target: &Path) {
        let msg = format!("{} {} -> {}", mode.verb(), name, target.display());
        self.log(LogLevel::Info, &MessagePrefix::Success.format(&msg));
    }

    pub fn file_skipped(&self, name: &str) {
        let msg = format!("{} already exists in destination", name);
        self.log(LogLevel::Info, &MessagePrefix::Skipped.format(&msg));
    }

    pub fn file_failed(&self, name: &str, reason: FailureReason, detail: &str) {
        let msg = format!("{} ({}): {}", name, reason, detail);
        self.log(LogLevel::Warn, &MessagePrefix::Failure.format(&msg));
    }

    pub fn cancelled(&self, remaining: usize) {
        let msg = format!("Cancelled, {} file(s) not attempted", remaining);
        self.log(LogLevel::Warn, &MessagePrefix::Summary.format(&msg));
    }

    pub fn summary(&self, succeeded: usize, skipped: usize, failed: usize) {
        let msg = format!("{} succeeded, {} skipped, {} failed", succeeded, skipped, failed);
        self.log(LogLevel::Info, &MessagePrefix::Summary.format(&msg));
        self.flush();
    }

    pub fn flush(&self) {
        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writer.flush();
        }
    }

    /// Close the log file. Later lines still reach the callback.
    pub fn close(&self) {
        self.flush();
        *self.file_writer.lock() = None;
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Warn | LogLevel::Error => tracing::warn!("{}", message),
            _ => tracing::debug!("{}", message),
        }

        let formatted = format!("[{}] {}", Local::now().format("%H:%M:%S"), message);

        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writeln!(writer, "{}", formatted);
        }

        if let Some(ref callback) = self.gui_callback {
            callback(&formatted);
        }
    }
}

impl Drop for TransferLogger {
    fn drop(&mut self) {
        self.close();
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn creates_log_file() {
        let dir = tempdir().unwrap();
        let logger = TransferLogger::new(dir.path(), None).unwrap();

        let path = logger.log_path().unwrap();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("transfer_"));
    }

    #[test]
    fn writes_outcomes_to_file() {
        let dir = tempdir().unwrap();
        let logger = TransferLogger::new(dir.path(), None).unwrap();

        logger.batch_started(TransferMode::Copy, 2, Path::new("/card"), Path::new("/photos"));
        logger.file_succeeded(TransferMode::Copy, "a.jpg", Path::new("/photos/a.jpg"));
        logger.file_failed("b.jpg", FailureReason::MissingSource, "gone");
        logger.summary(1, 0, 1);

        let content = fs::read_to_string(logger.log_path().unwrap()).unwrap();
        assert!(content.contains("=== Copy 2 file(s) ==="));
        assert!(content.contains("[OK] Copied a.jpg"));
        assert!(content.contains("[FAIL] b.jpg (missing source): gone"));
        assert!(content.contains("[SUMMARY] 1 succeeded, 0 skipped, 1 failed"));
    }

    #[test]
    fn calls_gui_callback() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let count_clone = call_count.clone();

        let callback: GuiLogCallback = Box::new(move |_msg| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let logger = TransferLogger::without_file(Some(callback));
        logger.file_skipped("a.jpg");
        logger.file_skipped("b.jpg");

        assert_eq!(call_count.load(Ordering::SeqCst), 2);
        assert!(logger.log_path().is_none());
    }

    #[test]
    fn callback_lines_carry_timestamp() {
        let lines = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = lines.clone();
        let callback: GuiLogCallback = Box::new(move |msg| sink.lock().push(msg.to_string()));

        let logger = TransferLogger::without_file(Some(callback));
        logger.file_skipped("a.jpg");

        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        // "[HH:MM:SS] " prefix
        assert_eq!(&lines[0][0..1], "[");
        assert_eq!(&lines[0][9..11], "] ");
        assert!(lines[0].ends_with("[SKIP] a.jpg already exists in destination"));
    }

    #[test]
    fn capitalizes_mode() {
        assert_eq!(capitalize("move"), "Move");
        assert_eq!(capitalize(""), "");
    }
}
