//! Destination side: the folder tree the user picks a target from.

mod folders;
mod tree;

pub use folders::{create_folder, FolderError, FolderOutcome};
pub use tree::{list_children, resolve_destination, DestinationNode};
