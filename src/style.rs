//! Terminal styling utilities
//!
//! Unified color language for CLI output and the TUI:
//! - Semantic colors for status (green/yellow/red)
//! - Cyan for headers and technical terms
//! - Dim for secondary information

use crossterm::style::Stylize;

/// Extension trait for consistent BizDesk CLI styling
///
/// Use these methods instead of direct color calls so CLI output stays
/// consistent with the TUI palette below.
pub trait BizStyle: Stylize {
    /// Style for section headers (cyan bold)
    fn header(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.cyan().bold()
    }

    /// Style for success/active status (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Style for warning/partial status (yellow)
    fn warning(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.yellow()
    }

    /// Style for technical terms and identifiers (cyan)
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }
}

impl<T: Stylize> BizStyle for T {}

/// Semantic color palette for TUI use with ratatui
pub mod colors {
    use ratatui::style::Color;

    /// Color for selected UI elements (cyan, use with bold)
    pub const UI_SELECTED: Color = Color::Cyan;

    /// Background color for selected UI elements (dark gray)
    pub const UI_SELECTED_BG: Color = Color::DarkGray;

    /// Color for UI highlights (cyan)
    pub const UI_HIGHLIGHT: Color = Color::Cyan;

    /// Color for statistics/counts (yellow, use with bold)
    pub const UI_STAT: Color = Color::Yellow;

    /// Color for success states (green)
    pub const UI_SUCCESS: Color = Color::Green;

    /// Color for warning states (yellow)
    pub const UI_WARNING: Color = Color::Yellow;

    /// Color for error states (red)
    pub const UI_ERROR: Color = Color::Red;

    /// Color for secondary/dimmed text (gray)
    pub const UI_SECONDARY: Color = Color::Gray;

    /// Color for normal UI text (white)
    pub const UI_TEXT: Color = Color::White;
}
