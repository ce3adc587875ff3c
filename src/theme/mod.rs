//! Theme configuration for CLI output
//!
//! Centralizes the colors used by the photo table, status panels and
//! prompts. Colors are ratatui colors rendered as ANSI escape codes.

use ratatui::style::Color;

pub mod cli;

pub use cli::{color_to_ansi, ANSI_RESET};

/// Theme configuration for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for borders and counters
    pub accent: Color,
    /// Highlight for photo counts and file paths
    pub highlight: Color,
    /// Countdown/waiting color
    pub warning: Color,
    /// Error color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::Magenta,
            warning: Color::Yellow,
            error: Color::Red,
            success: Color::LightGreen,
        }
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
