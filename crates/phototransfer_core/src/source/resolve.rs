//! Locating the camera card from a glob pattern.

use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::models::SourceLocation;

/// Expand `pattern` against the filesystem and pick the first directory.
///
/// Runs before every scan since the card can be plugged in or pulled
/// between refreshes. Matches are sorted so the pick is stable.
pub fn resolve_source(pattern: &str) -> SourceLocation {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return SourceLocation::Unavailable {
            pattern: pattern.to_string(),
        };
    }

    match expand_glob(trimmed).into_iter().find(|path| path.is_dir()) {
        Some(dir) => {
            tracing::debug!("Source pattern {} resolved to {}", trimmed, dir.display());
            SourceLocation::Available(dir)
        }
        None => {
            tracing::info!("No directory matches source pattern {}", trimmed);
            SourceLocation::Unavailable {
                pattern: trimmed.to_string(),
            }
        }
    }
}

/// All existing paths matching `pattern`, sorted.
///
/// Wildcards apply within one path component, never across separators.
pub fn expand_glob(pattern: &str) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::new()];

    for component in Path::new(pattern).components() {
        let next = match component {
            Component::Normal(part) => {
                let part = part.to_string_lossy();
                if has_glob_meta(&part) {
                    match component_matcher(&part) {
                        Some(matcher) => candidates
                            .iter()
                            .flat_map(|base| matching_children(base, &matcher))
                            .collect(),
                        None => Vec::new(),
                    }
                } else {
                    candidates
                        .iter()
                        .map(|base| base.join(&*part))
                        .filter(|path| path.symlink_metadata().is_ok())
                        .collect()
                }
            }
            other => candidates
                .iter()
                .map(|base| base.join(other.as_os_str()))
                .collect(),
        };

        candidates = next;
        if candidates.is_empty() {
            break;
        }
    }

    candidates.retain(|path| !path.as_os_str().is_empty() && path.exists());
    candidates.sort();
    candidates.dedup();
    candidates
}

fn has_glob_meta(part: &str) -> bool {
    part.contains(['*', '?', '[', '{'])
}

fn component_matcher(part: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(part).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            tracing::warn!("Invalid glob component {:?}: {}", part, e);
            None
        }
    }
}

fn matching_children(base: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let dir = if base.as_os_str().is_empty() {
        Path::new(".")
    } else {
        base
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            // Like shell globs, wildcards do not pick up dot-files
            !name.starts_with('.') && matcher.is_match(&*name)
        })
        .map(|entry| base.join(entry.file_name()))
        .collect()
}
