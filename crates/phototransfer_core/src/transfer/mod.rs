//! Transfer execution.
//!
//! This module provides:
//! - `TransferExecutor`: per-file copy/move with an explicit collision policy
//! - `TransferReport`: succeeded / skipped / failed / not attempted
//! - `CancelHandle` and `ProgressCallback` for running batches off the UI thread
//!
//! After any batch both the source listing and the destination tree are
//! stale; callers rescan and reload them once the report comes back.

mod executor;
mod naming;
mod types;
mod verify;

pub use executor::TransferExecutor;
pub use naming::{is_plain_name, unique_target};
pub use types::{
    CancelHandle, ProgressCallback, TransferError, TransferOptions, TransferReport,
    TransferredFile,
};
pub use verify::{files_match, sha256_of_file};
