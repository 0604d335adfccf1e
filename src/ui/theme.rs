//! Theme: dark, one accent colour for the prompt, selection and matches.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Results canvas.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Prompt bar and status.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Prompt, selection bar, matched characters.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Selected row background.
    pub const ACCENT_GLOW: Color = Color::Rgb(0x1e, 0x2d, 0x3d);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints, identifiers.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
}

/// Prompt line plus its bottom separator.
pub const PROMPT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_RESULT_LINES: u16 = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const PROMPT: &str = " ▸ ";
pub const SELECTION_BAR: &str = "▎ ";
