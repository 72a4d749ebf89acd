//! Handler modules.
//!
//! Each module adds `impl App` methods for one panel; they translate UI
//! messages into `phototransfer_core` calls and keep no logic of their own
//! beyond wiring.

mod destination;
mod dialogs;
mod source;
mod transfer;

pub use destination::TreeRow;
