//! Page views

pub mod main_window;
