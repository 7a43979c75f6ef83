//! Color theme constants.

use ratatui::style::Color;

/// Navigation bar background, the green of the web client's app bar.
pub const COLOR_NAV_BG: Color = Color::Rgb(94, 184, 155);

/// Text drawn on the navigation bar.
pub const COLOR_NAV_FG: Color = Color::White;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the highlighted card
pub const COLOR_SELECTED: Color = Color::Rgb(94, 184, 155);

/// Card and detail titles
pub const COLOR_HEADER: Color = Color::White;

/// Category chip
pub const COLOR_CATEGORY: Color = Color::Rgb(94, 184, 155);

/// Dim text for bylines and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Success notices
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error notices and the delete action
pub const COLOR_ERROR: Color = Color::Red;

/// Info notices
pub const COLOR_INFO: Color = Color::Cyan;

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
