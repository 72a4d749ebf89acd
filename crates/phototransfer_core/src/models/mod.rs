//! Data models for Photo Transfer.
//!
//! This module contains the plain values exchanged between the core and the UI:
//! - Enums for transfer mode, collision policy, failure reasons
//! - Source location and file entries
//! - The recency window

mod entries;
mod enums;
mod window;

pub use entries::{format_size, FileEntry, SourceLocation};
pub use enums::{CollisionPolicy, FailureReason, TransferMode};
pub use window::{sanitize_window_input, RecencyWindow, WindowParseError};
