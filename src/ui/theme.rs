//! Color palettes for the light and dark schemes.

use ratatui::style::Color;

/// Colors used by the views for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub selection: Color,
}

/// Dark palette.
pub const DARK: Palette = Palette {
    background: Color::Rgb(9, 9, 11),
    foreground: Color::Rgb(250, 250, 250),
    accent: Color::Rgb(56, 189, 248),
    muted: Color::DarkGray,
    border: Color::Rgb(39, 39, 42),
    selection: Color::Rgb(39, 39, 42),
};

/// Light palette.
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(9, 9, 11),
    accent: Color::Rgb(2, 132, 199),
    muted: Color::Gray,
    border: Color::Rgb(228, 228, 231),
    selection: Color::Rgb(244, 244, 245),
};

impl Palette {
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }
}
