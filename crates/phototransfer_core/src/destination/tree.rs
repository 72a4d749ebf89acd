//! Destination tree listing and node resolution.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// One node of the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Direct children of `dir`, directories first, each group by name.
///
/// Unreadable directories list as empty; the tree just shows no children.
pub fn list_children(dir: &Path) -> Vec<DestinationNode> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut nodes: Vec<DestinationNode> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let path = entry.path();
            DestinationNode {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: path.is_dir(),
                path,
            }
        })
        .collect();

    nodes.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
    nodes
}

/// Directory a transfer should land in.
///
/// The highlighted node wins when it is an existing directory inside
/// `root`; anything else (nothing highlighted, a file, a deleted folder,
/// a path outside the root) falls back to `root`.
pub fn resolve_destination(root: &Path, highlighted: Option<&Path>) -> PathBuf {
    match highlighted {
        Some(node) if is_inside(root, node) && node.is_dir() => node.to_path_buf(),
        Some(node) => {
            tracing::debug!(
                "Highlighted node {} is not a usable folder, using {}",
                node.display(),
                root.display()
            );
            root.to_path_buf()
        }
        None => root.to_path_buf(),
    }
}

/// `node` sits under `root` without climbing out through `..`.
fn is_inside(root: &Path, node: &Path) -> bool {
    match node.strip_prefix(root) {
        Ok(rest) => rest
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_directories_first_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), b"x").unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();

        let names: Vec<_> = list_children(dir.path())
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(names, ["Alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn missing_dir_lists_empty() {
        let dir = tempdir().unwrap();
        assert!(list_children(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn resolves_highlighted_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("2024").join("trip");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(resolve_destination(dir.path(), Some(&nested)), nested);
    }

    #[test]
    fn falls_back_to_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").unwrap();
        let outside = tempdir().unwrap();

        let root = dir.path();
        assert_eq!(resolve_destination(root, None), root);
        assert_eq!(resolve_destination(root, Some(&file)), root);
        assert_eq!(resolve_destination(root, Some(&root.join("deleted"))), root);
        assert_eq!(resolve_destination(root, Some(outside.path())), root);
    }

    #[test]
    fn parent_components_cannot_escape_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("photos");
        fs::create_dir_all(root.join("day1")).unwrap();
        fs::create_dir(dir.path().join("elsewhere")).unwrap();

        let escaping = root.join("..").join("elsewhere");
        assert!(escaping.is_dir());
        assert_eq!(resolve_destination(&root, Some(&escaping)), root);

        let round_trip = root.join("day1").join("..").join("day1");
        assert_eq!(resolve_destination(&root, Some(&round_trip)), root);
    }
}
