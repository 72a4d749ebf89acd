//! Modal message dialogs.

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Show a blocking warning; `Message::DialogClosed` fires once dismissed.
    ///
    /// While one warning is open, later ones wait in order.
    pub fn show_warning(&mut self, title: &str, description: String) -> Task<Message> {
        if self.warning_open {
            tracing::debug!("Warning dialog already open, queueing: {}", title);
            self.pending_warnings.push_back((title.to_string(), description));
            return Task::none();
        }
        self.warning_open = true;
        warning_dialog(title.to_string(), description)
    }

    /// The open warning was dismissed; show the next queued one.
    pub fn handle_dialog_closed(&mut self) -> Task<Message> {
        match self.pending_warnings.pop_front() {
            Some((title, description)) => warning_dialog(title, description),
            None => {
                self.warning_open = false;
                Task::none()
            }
        }
    }
}

fn warning_dialog(title: String, description: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_title(title)
                .set_description(description)
                .set_level(rfd::MessageLevel::Warning)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::DialogClosed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use phototransfer_core::config::ConfigManager;
    use tempfile::tempdir;

    #[test]
    fn second_warning_waits_for_the_first() {
        let tmp = tempdir().unwrap();
        let (mut app, _) = App::boot(ConfigManager::new(tmp.path().join("settings.toml")));

        let _ = app.show_warning("First", "one".to_string());
        let _ = app.show_warning("Second", "two".to_string());
        assert!(app.warning_open);
        assert_eq!(app.pending_warnings.len(), 1);
        assert_eq!(app.pending_warnings[0].0, "Second");

        let _ = app.handle_dialog_closed();
        assert!(app.warning_open);
        assert!(app.pending_warnings.is_empty());

        let _ = app.handle_dialog_closed();
        assert!(!app.warning_open);
    }
}
