//! Source panel handlers: recency window and card refresh.

use iced::Task;

use phototransfer_core::models::{sanitize_window_input, RecencyWindow, SourceLocation};
use phototransfer_core::source::SourceListing;

use crate::app::{App, Message};

impl App {
    /// Keep the window field digits-only.
    pub fn handle_window_days_changed(&mut self, value: &str) {
        self.window_input = sanitize_window_input(value);
    }

    /// Re-resolve the card and rescan it with the current window.
    ///
    /// Every refresh replaces the listing, so checks are cleared.
    pub fn refresh_source(&mut self) -> Task<Message> {
        let pattern = self.config.settings().paths.source_dir_pattern.clone();

        // A cleared field still rescans, using the configured default
        let window = match self.window_input.parse::<RecencyWindow>() {
            Ok(window) => window,
            Err(e) => {
                let fallback = self.config.settings().scan.default_window_days;
                tracing::debug!("{}, scanning with {} day(s)", e, fallback);
                self.window_input = fallback.to_string();
                fallback
            }
        };

        match SourceListing::refresh(&self.scanner, &pattern, window) {
            Ok(listing) => {
                self.listing = listing;
            }
            Err(e) => {
                tracing::warn!("Source scan failed: {}", e);
                self.listing = SourceListing::empty(SourceLocation::Unavailable {
                    pattern: pattern.clone(),
                });
                self.set_status(format!("Scan failed: {}", e), true);
                return Task::none();
            }
        }

        match &self.listing.location {
            SourceLocation::Available(path) => {
                let count = self.listing.entries.len();
                self.set_status(
                    format!(
                        "{} item(s) from the last {} day(s) in {}",
                        count,
                        window.days(),
                        path.display()
                    ),
                    false,
                );
                Task::none()
            }
            SourceLocation::Unavailable { pattern } => {
                let pattern = pattern.clone();
                tracing::warn!("No source directory matches {}", pattern);
                self.set_status("Source not available", true);
                self.append_log(&format!("Source not available: {}", pattern));
                self.show_warning(
                    "Source not available",
                    format!(
                        "No memory card found.\n\nLooked for a directory matching:\n{}",
                        pattern
                    ),
                )
            }
        }
    }
}
