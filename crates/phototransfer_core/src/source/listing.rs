//! Selection state over one scan result.

use crate::models::{FileEntry, RecencyWindow, SourceLocation};

use super::{resolve_source, ScanError, Scanner};

/// The checkable source list.
///
/// Replaced wholesale on every refresh, so checks never survive a rescan.
#[derive(Debug, Clone)]
pub struct SourceListing {
    pub location: SourceLocation,
    pub entries: Vec<FileEntry>,
}

impl SourceListing {
    /// Resolve the card and scan it in one go.
    pub fn refresh(
        scanner: &Scanner,
        pattern: &str,
        window: RecencyWindow,
    ) -> Result<Self, ScanError> {
        let location = resolve_source(pattern);
        let entries = scanner.scan_location(&location, window)?;
        Ok(Self { location, entries })
    }

    pub fn empty(location: SourceLocation) -> Self {
        Self {
            location,
            entries: Vec::new(),
        }
    }

    /// Flip the check on `name`. Returns false when the name is not listed.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.selected = !entry.selected;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.selected = selected;
        }
    }

    /// Checked names in list order.
    pub fn selected_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.name.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::SystemTime;
    use tempfile::tempdir;

    fn listing() -> SourceListing {
        let now = SystemTime::now();
        SourceListing {
            location: SourceLocation::Available("/card".into()),
            entries: vec![
                FileEntry::new("a.jpg", now, 1, false),
                FileEntry::new("b.jpg", now, 1, false),
                FileEntry::new("c.jpg", now, 1, false),
            ],
        }
    }

    #[test]
    fn toggle_and_collect() {
        let mut listing = listing();
        assert!(listing.toggle("b.jpg"));
        assert!(listing.toggle("c.jpg"));
        assert!(listing.toggle("c.jpg"));
        assert!(!listing.toggle("zzz.jpg"));

        assert_eq!(listing.selected_names(), ["b.jpg"]);
        assert_eq!(listing.selected_count(), 1);
    }

    #[test]
    fn select_all_and_none() {
        let mut listing = listing();
        listing.set_all(true);
        assert_eq!(listing.selected_count(), 3);
        listing.toggle("a.jpg");
        assert_eq!(listing.selected_names(), ["b.jpg", "c.jpg"]);
        listing.set_all(false);
        assert!(listing.selected_names().is_empty());
    }

    #[test]
    fn refresh_drops_previous_selection() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        let pattern = dir.path().to_string_lossy().to_string();
        let scanner = Scanner::default();

        let mut first = SourceListing::refresh(&scanner, &pattern, RecencyWindow::new(1)).unwrap();
        first.set_all(true);
        assert_eq!(first.selected_count(), 1);

        let second = SourceListing::refresh(&scanner, &pattern, RecencyWindow::new(1)).unwrap();
        assert_eq!(second.entries.len(), 1);
        assert_eq!(second.selected_count(), 0);
    }

    #[test]
    fn refresh_without_card_is_empty() {
        let dir = tempdir().unwrap();
        let pattern = dir.path().join("nope*").to_string_lossy().to_string();

        let listing =
            SourceListing::refresh(&Scanner::default(), &pattern, RecencyWindow::new(1)).unwrap();
        assert!(!listing.location.is_available());
        assert!(listing.entries.is_empty());
    }
}
