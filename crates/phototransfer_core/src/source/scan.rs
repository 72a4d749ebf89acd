//! Listing recently modified entries of the source directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

use crate::config::ScanSettings;
use crate::models::{FileEntry, RecencyWindow, SourceLocation};

/// Errors from listing the source directory.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source is not an accessible directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Stateless scanner configured from the `[scan]` section.
#[derive(Debug, Clone)]
pub struct Scanner {
    include_hidden: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            include_hidden: true,
        }
    }
}

impl Scanner {
    pub fn new(settings: &ScanSettings) -> Self {
        Self {
            include_hidden: settings.include_hidden,
        }
    }

    /// Entries of `directory` modified strictly after now minus `window`.
    pub fn scan(&self, directory: &Path, window: RecencyWindow) -> Result<Vec<FileEntry>, ScanError> {
        self.scan_at(directory, window, SystemTime::now())
    }

    /// Same as [`Scanner::scan`] against an explicit reference instant.
    ///
    /// Non-recursive. An entry modified exactly at the cutoff is excluded.
    /// Entries that vanish or cannot be stat'ed mid-listing are skipped.
    pub fn scan_at(
        &self,
        directory: &Path,
        window: RecencyWindow,
        now: SystemTime,
    ) -> Result<Vec<FileEntry>, ScanError> {
        if !directory.is_dir() {
            return Err(ScanError::NotADirectory(directory.to_path_buf()));
        }

        let cutoff = window.cutoff(now);
        let read_dir = fs::read_dir(directory).map_err(|source| ScanError::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
                    continue;
                }
            };

            // Names travel to the executor as strings, so a lossy name
            // could never be found again
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(
                        "Skipping {:?} in {}: name is not valid UTF-8",
                        raw,
                        directory.display()
                    );
                    continue;
                }
            };
            if !self.include_hidden && name.starts_with('.') {
                continue;
            }

            // Follows symlinks so a linked photo reports the photo's time
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", name, e);
                    continue;
                }
            };
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::warn!("No modification time for {}: {}", name, e);
                    continue;
                }
            };

            if modified > cutoff {
                entries.push(FileEntry::new(name, modified, metadata.len(), metadata.is_dir()));
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "Scanned {}: {} entries within {} day(s)",
            directory.display(),
            entries.len(),
            window
        );
        Ok(entries)
    }

    /// Scan a resolved location; an unavailable card yields an empty list.
    pub fn scan_location(
        &self,
        location: &SourceLocation,
        window: RecencyWindow,
    ) -> Result<Vec<FileEntry>, ScanError> {
        match location {
            SourceLocation::Available(dir) => self.scan(dir, window),
            SourceLocation::Unavailable { .. } => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use std::time::Duration;
    use tempfile::tempdir;

    const HOUR: u64 = 60 * 60;
    const DAY: u64 = 24 * HOUR;

    fn touch(dir: &Path, name: &str, modified: SystemTime) {
        let path = dir.join(name);
        fs::write(&path, name.as_bytes()).unwrap();
        set_file_mtime(&path, FileTime::from_system_time(modified)).unwrap();
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn recent_file_in_old_file_out() {
        crate::logging::init_test_tracing();
        let dir = tempdir().unwrap();
        let now = SystemTime::now();
        touch(dir.path(), "a.jpg", now - Duration::from_secs(2 * HOUR));
        touch(dir.path(), "b.jpg", now - Duration::from_secs(3 * DAY));

        let entries = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(1), now)
            .unwrap();
        assert_eq!(names(&entries), ["a.jpg"]);
        assert!(!entries[0].selected);
    }

    #[test]
    fn boundary_is_excluded() {
        let dir = tempdir().unwrap();
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        touch(dir.path(), "edge.jpg", now - Duration::from_secs(DAY));
        touch(dir.path(), "inside.jpg", now - Duration::from_secs(DAY - 1));

        let entries = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(1), now)
            .unwrap();
        assert_eq!(names(&entries), ["inside.jpg"]);
    }

    #[test]
    fn zero_window_keeps_only_future_entries() {
        let dir = tempdir().unwrap();
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        touch(dir.path(), "past.jpg", now - Duration::from_secs(1));
        touch(dir.path(), "future.jpg", now + Duration::from_secs(60));

        let entries = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(0), now)
            .unwrap();
        assert_eq!(names(&entries), ["future.jpg"]);
    }

    #[test]
    fn results_are_sorted_and_repeatable() {
        let dir = tempdir().unwrap();
        let now = SystemTime::now();
        for name in ["c.jpg", "a.jpg", "b.jpg"] {
            touch(dir.path(), name, now - Duration::from_secs(HOUR));
        }

        let scanner = Scanner::default();
        let first = scanner.scan_at(dir.path(), RecencyWindow::new(1), now).unwrap();
        let second = scanner.scan_at(dir.path(), RecencyWindow::new(1), now).unwrap();
        assert_eq!(names(&first), ["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(first, second);
    }

    #[test]
    fn listing_is_not_recursive() {
        let dir = tempdir().unwrap();
        let now = SystemTime::now();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "nested.jpg", now);
        touch(dir.path(), "top.jpg", now);

        let entries = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(1), now + Duration::from_secs(1))
            .unwrap();
        let listed = names(&entries);
        assert!(listed.contains(&"top.jpg"));
        assert!(!listed.contains(&"nested.jpg"));
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert!(sub.is_dir);
    }

    #[test]
    fn hidden_entries_follow_setting() {
        let dir = tempdir().unwrap();
        let now = SystemTime::now();
        touch(dir.path(), ".thumbs", now - Duration::from_secs(HOUR));
        touch(dir.path(), "a.jpg", now - Duration::from_secs(HOUR));

        let all = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(1), now)
            .unwrap();
        assert_eq!(all.len(), 2);

        let visible = Scanner::new(&ScanSettings {
            include_hidden: false,
            ..ScanSettings::default()
        })
        .scan_at(dir.path(), RecencyWindow::new(1), now)
        .unwrap();
        assert_eq!(names(&visible), ["a.jpg"]);
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = Scanner::default()
            .scan(&missing, RecencyWindow::default())
            .unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn file_path_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").unwrap();

        assert!(Scanner::default().scan(&file, RecencyWindow::default()).is_err());
    }

    #[test]
    fn unavailable_location_scans_empty() {
        let location = SourceLocation::Unavailable {
            pattern: "/nowhere/*".to_string(),
        };
        let entries = Scanner::default()
            .scan_location(&location, RecencyWindow::default())
            .unwrap();
        assert!(entries.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let now = SystemTime::now();
        fs::write(dir.path().join(OsStr::from_bytes(b"IMG_\xff.jpg")), b"x").unwrap();
        touch(dir.path(), "a.jpg", now - Duration::from_secs(HOUR));

        let entries = Scanner::default()
            .scan_at(dir.path(), RecencyWindow::new(1), now + Duration::from_secs(1))
            .unwrap();
        assert_eq!(names(&entries), ["a.jpg"]);
    }

    #[test]
    fn records_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), vec![0u8; 1234]).unwrap();

        let entries = Scanner::default().scan(dir.path(), RecencyWindow::new(1)).unwrap();
        assert_eq!(entries[0].size, 1234);
    }
}
