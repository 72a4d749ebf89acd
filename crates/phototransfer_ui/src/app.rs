//! Main application module for Photo Transfer.
//!
//! Holds the UI state and routes messages to the handler modules. All
//! filesystem work goes through `phototransfer_core`.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::time::Duration;

use iced::{Element, Subscription, Task};

use phototransfer_core::config::ConfigManager;
use phototransfer_core::models::{CollisionPolicy, SourceLocation, TransferMode};
use phototransfer_core::source::{Scanner, SourceListing};
use phototransfer_core::transfer::TransferReport;

use crate::handlers::TreeRow;
use crate::workers::RunningTransfer;

/// How often the UI picks up worker progress while a batch runs.
const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Keep the on-screen log bounded.
const MAX_LOG_LINES: usize = 500;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Source panel
    WindowDaysChanged(String),
    RefreshSource,
    EntryToggled(String),
    SelectAll,
    SelectNone,

    // Destination panel
    NodeHighlighted(PathBuf),
    NodeExpandToggled(PathBuf),
    NewFolderNameChanged(String),
    CreateFolder,

    // Transfer
    StartTransfer(TransferMode),
    CancelTransfer,
    CollisionPolicyChanged(CollisionPolicy),
    PollProgress,
    TransferFinished(Result<TransferReport, String>),

    // Dialogs
    DialogClosed,
}

/// Main application state.
pub struct App {
    pub config: ConfigManager,
    pub scanner: Scanner,

    // Source panel
    pub window_input: String,
    pub listing: SourceListing,
    pub warning_open: bool,
    pub pending_warnings: VecDeque<(String, String)>,

    // Destination panel
    pub destination_root: PathBuf,
    pub tree_rows: Vec<TreeRow>,
    pub expanded: HashSet<PathBuf>,
    pub highlighted: Option<PathBuf>,
    pub new_folder_name: String,

    // Transfer state
    pub transfer: Option<RunningTransfer>,
    pub status_text: String,
    pub status_is_warning: bool,
    pub log_lines: Vec<String>,
}

impl App {
    /// Build initial state and queue the first scan.
    pub fn boot(config: ConfigManager) -> (Self, Task<Message>) {
        let settings = config.settings().clone();
        let destination_root = config.destination_dir();

        let mut app = Self {
            scanner: Scanner::new(&settings.scan),
            window_input: settings.scan.default_window_days.to_string(),
            listing: SourceListing::empty(SourceLocation::Unavailable {
                pattern: settings.paths.source_dir_pattern.clone(),
            }),
            warning_open: false,
            pending_warnings: VecDeque::new(),
            destination_root,
            tree_rows: Vec::new(),
            expanded: HashSet::new(),
            highlighted: None,
            new_folder_name: String::new(),
            transfer: None,
            status_text: String::from("Ready"),
            status_is_warning: false,
            log_lines: Vec::new(),
            config,
        };
        app.reload_destination();
        app.append_log(&format!(
            "Photo Transfer {} - destination {}",
            phototransfer_core::version(),
            app.destination_root.display()
        ));

        (app, Task::done(Message::RefreshSource))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowDaysChanged(value) => {
                self.handle_window_days_changed(&value);
                Task::none()
            }
            Message::RefreshSource => self.refresh_source(),
            Message::EntryToggled(name) => {
                self.listing.toggle(&name);
                Task::none()
            }
            Message::SelectAll => {
                self.listing.set_all(true);
                Task::none()
            }
            Message::SelectNone => {
                self.listing.set_all(false);
                Task::none()
            }

            Message::NodeHighlighted(path) => {
                self.highlight_node(path);
                Task::none()
            }
            Message::NodeExpandToggled(path) => {
                self.toggle_node_expanded(path);
                Task::none()
            }
            Message::NewFolderNameChanged(name) => {
                self.new_folder_name = name;
                Task::none()
            }
            Message::CreateFolder => self.create_folder(),

            Message::StartTransfer(mode) => self.start_transfer(mode),
            Message::CancelTransfer => {
                self.cancel_transfer();
                Task::none()
            }
            Message::CollisionPolicyChanged(policy) => {
                self.change_collision_policy(policy);
                Task::none()
            }
            Message::PollProgress => {
                self.poll_progress();
                Task::none()
            }
            Message::TransferFinished(result) => self.handle_transfer_finished(result),

            Message::DialogClosed => self.handle_dialog_closed(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::pages::main_window::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.transfer.is_some() {
            iced::time::every(PROGRESS_POLL_INTERVAL).map(|_| Message::PollProgress)
        } else {
            Subscription::none()
        }
    }

    pub fn is_transferring(&self) -> bool {
        self.transfer.is_some()
    }

    pub fn append_log(&mut self, message: &str) {
        self.log_lines.push(message.to_string());
        if self.log_lines.len() > MAX_LOG_LINES {
            let overflow = self.log_lines.len() - MAX_LOG_LINES;
            self.log_lines.drain(..overflow);
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_warning: bool) {
        self.status_text = text.into();
        self.status_is_warning = is_warning;
    }
}
