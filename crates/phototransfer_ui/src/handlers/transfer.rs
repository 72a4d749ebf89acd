//! Transfer handlers: start, cancel, progress polling and completion.

use std::sync::Arc;

use iced::Task;
use parking_lot::Mutex;

use phototransfer_core::config::ConfigSection;
use phototransfer_core::models::{CollisionPolicy, TransferMode};
use phototransfer_core::transfer::{CancelHandle, TransferReport};

use crate::app::{App, Message};
use crate::workers::{run_transfer, TransferJob, TransferProgress};

impl App {
    /// Start copying or moving the checked entries into the current destination.
    pub fn start_transfer(&mut self, mode: TransferMode) -> Task<Message> {
        if self.is_transferring() {
            return Task::none();
        }

        let Some(source_dir) = self.listing.location.path().map(|p| p.to_path_buf()) else {
            self.set_status("Source not available", true);
            return Task::none();
        };

        let names = self.listing.selected_names();
        if names.is_empty() {
            self.set_status("Nothing selected", true);
            return Task::none();
        }

        let settings = self.config.settings();
        let job = TransferJob {
            mode,
            names,
            source_dir,
            dest_dir: self.current_destination(),
            settings: settings.transfer.clone(),
            log_dir: settings
                .logging
                .keep_transfer_logs
                .then(|| self.config.logs_folder()),
            cancel: CancelHandle::new(),
            progress: Arc::new(Mutex::new(TransferProgress::default())),
        };

        tracing::info!(
            "Starting {} of {} file(s) into {}",
            mode,
            job.names.len(),
            job.dest_dir.display()
        );
        self.set_status(format!("Starting {} of {} file(s)...", mode, job.names.len()), false);
        self.transfer = Some(job.handle());

        Task::perform(run_transfer(job), Message::TransferFinished)
    }

    pub fn cancel_transfer(&mut self) {
        if let Some(running) = &self.transfer {
            running.cancel.cancel();
            self.set_status("Cancelling after the current file...", true);
        }
    }

    /// Pull progress and log lines from the worker.
    pub fn poll_progress(&mut self) {
        let Some(running) = &self.transfer else {
            return;
        };

        let (lines, status) = {
            let mut progress = running.progress.lock();
            let status = if progress.total > 0 && !running.cancel.is_cancelled() {
                Some(format!(
                    "{} {}/{}: {}",
                    running.mode.verb(),
                    progress.done,
                    progress.total,
                    progress.current
                ))
            } else {
                None
            };
            (progress.take_log(), status)
        };

        for line in lines {
            self.append_log(&line);
        }
        if let Some(status) = status {
            self.set_status(status, false);
        }
    }

    /// Worker finished: refresh both lists, then report.
    pub fn handle_transfer_finished(
        &mut self,
        result: Result<TransferReport, String>,
    ) -> Task<Message> {
        // Drain lines written after the last poll
        self.poll_progress();
        self.transfer = None;

        // Rescan before reporting so the batch summary stays on the status line
        self.reload_destination();
        let refresh_task = self.refresh_source();

        let summary_task = match result {
            Ok(report) => {
                let status = report.status_line();
                tracing::info!("Transfer finished: {}", status);
                self.append_log(&status);
                self.set_status(status, !report.is_clean());

                if report.failed.is_empty() {
                    Task::none()
                } else {
                    let attempted =
                        report.failed.len() + report.succeeded.len() + report.skipped.len();
                    self.show_warning(
                        "Some files were not transferred",
                        format!(
                            "{} of {} file(s) failed:\n\n{}",
                            report.failed.len(),
                            attempted,
                            report.failure_summary()
                        ),
                    )
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.append_log(&e);
                self.set_status("Transfer failed", true);
                self.show_warning("Transfer failed", e)
            }
        };

        Task::batch([refresh_task, summary_task])
    }

    /// Persist a new collision policy to the `[transfer]` section.
    pub fn change_collision_policy(&mut self, policy: CollisionPolicy) {
        if self.config.settings().transfer.collision_policy == policy {
            return;
        }
        self.config.settings_mut().transfer.collision_policy = policy;
        if let Err(e) = self.config.update_section(ConfigSection::Transfer) {
            tracing::warn!("Failed to save collision policy: {}", e);
            self.append_log(&format!("Settings not saved: {}", e));
        } else {
            self.append_log(&format!("Existing files: {}", policy));
        }
    }
}
