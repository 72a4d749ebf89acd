//! Background workers for long-running tasks

mod transfer;

pub use transfer::{run_transfer, RunningTransfer, TransferJob, TransferProgress};
