//! Destination panel handlers: tree browsing and folder creation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use iced::Task;

use phototransfer_core::destination::{
    create_folder, list_children, resolve_destination, DestinationNode, FolderOutcome,
};

use crate::app::{App, Message};

/// One visible line of the destination tree.
#[derive(Debug, Clone)]
pub struct TreeRow {
    pub node: DestinationNode,
    pub depth: usize,
    pub expanded: bool,
}

/// Flatten the tree under `root` into visible rows.
///
/// Only folders in `expanded` have their children listed.
pub fn build_tree_rows(root: &Path, expanded: &HashSet<PathBuf>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_children(root, 0, expanded, &mut rows);
    rows
}

fn push_children(dir: &Path, depth: usize, expanded: &HashSet<PathBuf>, rows: &mut Vec<TreeRow>) {
    for node in list_children(dir) {
        let is_open = node.is_dir && expanded.contains(&node.path);
        let path = node.path.clone();
        rows.push(TreeRow {
            node,
            depth,
            expanded: is_open,
        });
        if is_open {
            push_children(&path, depth + 1, expanded, rows);
        }
    }
}

impl App {
    /// Re-read the destination tree from disk.
    ///
    /// Expanded and highlighted paths that no longer exist are forgotten.
    pub fn reload_destination(&mut self) {
        self.expanded.retain(|path| path.is_dir());
        if self.highlighted.as_ref().is_some_and(|path| !path.exists()) {
            self.highlighted = None;
        }
        self.tree_rows = build_tree_rows(&self.destination_root, &self.expanded);
    }

    pub fn highlight_node(&mut self, path: PathBuf) {
        self.highlighted = Some(path);
    }

    pub fn toggle_node_expanded(&mut self, path: PathBuf) {
        if !self.expanded.remove(&path) {
            self.expanded.insert(path);
        }
        self.tree_rows = build_tree_rows(&self.destination_root, &self.expanded);
    }

    /// Folder the next copy or move lands in.
    pub fn current_destination(&self) -> PathBuf {
        resolve_destination(&self.destination_root, self.highlighted.as_deref())
    }

    /// Create the typed folder under the destination root.
    pub fn create_folder(&mut self) -> Task<Message> {
        if self.is_transferring() {
            return Task::none();
        }

        match create_folder(&self.destination_root, &self.new_folder_name) {
            Ok(FolderOutcome::Skipped) => Task::none(),
            Ok(FolderOutcome::Created(path)) => {
                self.append_log(&format!("Created folder {}", path.display()));
                self.set_status(format!("Folder ready: {}", path.display()), false);
                self.new_folder_name.clear();
                self.reload_destination();
                Task::none()
            }
            Err(e) => {
                tracing::warn!("Folder creation failed: {}", e);
                self.append_log(&format!("Folder not created: {}", e));
                self.set_status("Folder not created", true);
                self.show_warning("Folder not created", e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collapsed_tree_lists_top_level_only() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2024").join("holiday")).unwrap();
        fs::write(dir.path().join("loose.jpg"), b"x").unwrap();

        let rows = build_tree_rows(dir.path(), &HashSet::new());

        let names: Vec<_> = rows.iter().map(|r| r.node.name.as_str()).collect();
        assert_eq!(names, vec!["2024", "loose.jpg"]);
        assert!(rows.iter().all(|r| r.depth == 0 && !r.expanded));
    }

    #[test]
    fn expanded_folder_shows_children_indented() {
        let dir = tempdir().unwrap();
        let year = dir.path().join("2024");
        fs::create_dir_all(year.join("holiday")).unwrap();
        fs::create_dir(dir.path().join("2025")).unwrap();

        let expanded: HashSet<PathBuf> = [year.clone()].into_iter().collect();
        let rows = build_tree_rows(dir.path(), &expanded);

        let layout: Vec<_> = rows
            .iter()
            .map(|r| (r.node.name.as_str(), r.depth))
            .collect();
        assert_eq!(layout, vec![("2024", 0), ("holiday", 1), ("2025", 0)]);
        assert!(rows[0].expanded);
        assert_eq!(rows[1].node.path, year.join("holiday"));
    }

    #[test]
    fn missing_root_gives_empty_tree() {
        let dir = tempdir().unwrap();
        let rows = build_tree_rows(&dir.path().join("gone"), &HashSet::new());
        assert!(rows.is_empty());
    }
}
