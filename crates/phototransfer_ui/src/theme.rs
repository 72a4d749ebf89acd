//! Theme configuration for Photo Transfer.
//!
//! Colors, spacing and font sizes shared by the views.

use iced::Color;

/// Application colors.
pub mod colors {
    use super::Color;

    /// Text primary
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Folder rows in the destination tree
    pub const FOLDER: Color = Color::from_rgb(0.55, 0.70, 0.95);

    /// Status line after a clean batch
    pub const SUCCESS: Color = Color::from_rgb(0.45, 0.75, 0.45);

    /// Status line after failures or a missing card
    pub const WARNING: Color = Color::from_rgb(0.90, 0.70, 0.30);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Tree indent per depth level
    pub const INDENT: f32 = 18.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Header font size
    pub const HEADER: f32 = 16.0;
}
