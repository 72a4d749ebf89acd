//! Logging infrastructure for Photo Transfer.
//!
//! This module provides:
//! - Application-wide `tracing` setup (stderr, optionally a log file)
//! - Per-batch transfer loggers with file + GUI callback output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use phototransfer_core::logging::TransferLogger;
//! use phototransfer_core::models::TransferMode;
//!
//! let logger = TransferLogger::new("/path/to/logs", None).unwrap();
//! logger.batch_started(TransferMode::Copy, 1, Path::new("/card"), Path::new("/photos"));
//! logger.summary(1, 0, 0);
//! ```

mod transfer_logger;
mod types;

use std::path::Path;

pub use transfer_logger::TransferLogger;
pub use types::{GuiLogCallback, LogLevel, MessagePrefix};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for application-wide logging.
///
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Like [`init_tracing`], plus a `photo-transfer.log` file in `logs_dir`.
///
/// Keep the returned guard alive for the lifetime of the process; dropping
/// it flushes and stops the file writer. Falls back to stderr only when the
/// directory cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!("Cannot create logs folder {}: {}", logs_dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::never(logs_dir, "photo-transfer.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }
}
