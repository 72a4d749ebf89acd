//! Creating new folders under the destination root.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Characters rejected in folder names on every platform, so a config
/// shared between machines behaves the same.
const FORBIDDEN_CHARS: [char; 8] = ['<', '>', ':', '"', '|', '?', '*', '\0'];

/// Errors from creating a destination folder.
#[derive(Error, Debug)]
pub enum FolderError {
    #[error("Invalid folder name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Permission denied creating {0}")]
    PermissionDenied(PathBuf),

    #[error("{0} exists and is not a folder")]
    NotADirectory(PathBuf),

    #[error("Failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What `create_folder` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOutcome {
    /// Name was blank after trimming; nothing touched.
    Skipped,
    /// The folder exists now (it may have existed before).
    Created(PathBuf),
}

/// Create `root/name`, including missing intermediate folders.
///
/// `name` may be nested (`2024/holiday`) but must stay inside `root`.
/// Creating a folder that already exists succeeds.
pub fn create_folder(root: &Path, name: &str) -> Result<FolderOutcome, FolderError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(FolderOutcome::Skipped);
    }

    let relative = validate_name(name)?;
    let target = root.join(relative);

    if target.exists() && !target.is_dir() {
        return Err(FolderError::NotADirectory(target));
    }

    match fs::create_dir_all(&target) {
        Ok(()) => {
            tracing::info!("Created folder {}", target.display());
            Ok(FolderOutcome::Created(target))
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(FolderError::PermissionDenied(target))
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists || e.kind() == io::ErrorKind::NotADirectory => {
            Err(FolderError::NotADirectory(target))
        }
        Err(source) => Err(FolderError::Io {
            path: target,
            source,
        }),
    }
}

fn validate_name(name: &str) -> Result<&Path, FolderError> {
    let invalid = |reason| FolderError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control()) {
        return Err(match c {
            '\0' => invalid("contains a NUL byte"),
            c if c.is_control() => invalid("contains a control character"),
            _ => invalid("contains one of < > : \" | ? *"),
        });
    }

    let path = Path::new(name);
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_string_lossy();
                if part.ends_with(' ') || part.ends_with('.') {
                    return Err(invalid("a folder name cannot end with a space or dot"));
                }
            }
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("cannot contain '..'")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be relative to the destination"))
            }
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn blank_name_is_noop() {
        let dir = tempdir().unwrap();

        assert_eq!(create_folder(dir.path(), "").unwrap(), FolderOutcome::Skipped);
        assert_eq!(create_folder(dir.path(), "   \t").unwrap(), FolderOutcome::Skipped);
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn trims_and_creates() {
        let dir = tempdir().unwrap();

        let outcome = create_folder(dir.path(), "  Holiday  ").unwrap();
        assert_eq!(outcome, FolderOutcome::Created(dir.path().join("Holiday")));
        assert!(dir.path().join("Holiday").is_dir());
    }

    #[test]
    fn second_call_is_idempotent() {
        let dir = tempdir().unwrap();

        create_folder(dir.path(), "X").unwrap();
        let outcome = create_folder(dir.path(), "X").unwrap();

        assert_eq!(outcome, FolderOutcome::Created(dir.path().join("X")));
        assert!(dir.path().join("X").is_dir());
        assert_eq!(entry_count(dir.path()), 1);
    }

    #[test]
    fn creates_intermediate_folders() {
        let dir = tempdir().unwrap();

        create_folder(dir.path(), "2024/summer/beach").unwrap();
        assert!(dir.path().join("2024").join("summer").join("beach").is_dir());
    }

    #[test]
    fn rejects_escaping_names() {
        let dir = tempdir().unwrap();

        for bad in ["../out", "a/../../b", "/abs"] {
            let err = create_folder(dir.path(), bad).unwrap_err();
            assert!(matches!(err, FolderError::InvalidName { .. }), "{}", bad);
        }
    }

    #[test]
    fn rejects_forbidden_characters() {
        let dir = tempdir().unwrap();

        for bad in ["what?", "a*b", "x:y", "trailing."] {
            assert!(matches!(
                create_folder(dir.path(), bad),
                Err(FolderError::InvalidName { .. })
            ));
        }
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn existing_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("taken"), b"x").unwrap();

        assert!(matches!(
            create_folder(dir.path(), "taken"),
            Err(FolderError::NotADirectory(_))
        ));
    }
}
