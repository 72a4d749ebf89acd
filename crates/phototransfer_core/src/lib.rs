//! Photo Transfer Core - backend logic for Photo Transfer
//!
//! This crate contains all business logic with zero UI dependencies:
//! locating the camera card, listing recent files on it, resolving the
//! destination folder, and copying or moving the selected files.

pub mod config;
pub mod destination;
pub mod logging;
pub mod models;
pub mod source;
pub mod transfer;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
