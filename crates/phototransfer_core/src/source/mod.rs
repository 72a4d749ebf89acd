//! Source side: finding the card and listing recent files on it.
//!
//! - `resolve_source`: glob pattern to [`SourceLocation`](crate::models::SourceLocation)
//! - `Scanner`: time-windowed, non-recursive listing
//! - `SourceListing`: the checkable list built from one scan

mod listing;
mod resolve;
mod scan;

pub use listing::SourceListing;
pub use resolve::{expand_glob, resolve_source};
pub use scan::{ScanError, Scanner};
