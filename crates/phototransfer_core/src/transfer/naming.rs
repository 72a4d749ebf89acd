//! Name checks and collision-free target names.

use std::path::{Component, Path, PathBuf};

#[cfg(windows)]
const REJECTED_CHARS: [char; 3] = ['/', '\\', '\0'];
#[cfg(not(windows))]
const REJECTED_CHARS: [char; 2] = ['/', '\0'];

/// A plain file name: one normal path component, no separators.
///
/// Backslash only separates paths on Windows; elsewhere it is an
/// ordinary file name character.
pub fn is_plain_name(name: &str) -> bool {
    if name.is_empty() || name.contains(REJECTED_CHARS) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// First free `stem (n).ext` in `dir`, starting at 1.
pub fn unique_target(dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string());
    let ext = path.extension().map(|e| e.to_string_lossy().to_string());

    let mut idx = 1u32;
    loop {
        let candidate = match &ext {
            Some(ext) => format!("{} ({}).{}", stem, idx, ext),
            None => format!("{} ({})", stem, idx),
        };
        let target = dir.join(candidate);
        if !target.exists() {
            return target;
        }
        idx += 1;
    }
}

/// Hidden sibling used while bytes are still being written.
pub fn partial_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.part", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn plain_names() {
        assert!(is_plain_name("IMG_0001.JPG"));
        assert!(is_plain_name(".hidden"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name("a/b.jpg"));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("."));
    }

    #[cfg(windows)]
    #[test]
    fn backslash_separates_on_windows() {
        assert!(!is_plain_name("a\\b.jpg"));
    }

    #[cfg(unix)]
    #[test]
    fn backslash_is_a_plain_character_on_unix() {
        assert!(is_plain_name("a\\b.jpg"));
    }

    #[test]
    fn unique_target_counts_up() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        assert_eq!(unique_target(dir.path(), "a.jpg"), dir.path().join("a (1).jpg"));

        fs::write(dir.path().join("a (1).jpg"), b"x").unwrap();
        assert_eq!(unique_target(dir.path(), "a.jpg"), dir.path().join("a (2).jpg"));
    }

    #[test]
    fn unique_target_without_extension() {
        let dir = tempdir().unwrap();
        assert_eq!(unique_target(dir.path(), "README"), dir.path().join("README (1)"));
    }

    #[test]
    fn partial_is_hidden_sibling() {
        assert_eq!(
            partial_path(Path::new("/d/a.jpg")),
            PathBuf::from("/d/.a.jpg.part")
        );
    }
}
