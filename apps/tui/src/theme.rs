//! # Theme Palettes
//!
//! One palette per resolved [`ThemeMode`]. The store only carries the
//! preference; resolving `System` is this layer's job (terminal default,
//! which is the dark palette).

use ratatui::style::Color;
use shopfront_core::ThemeMode;

/// Colors for one resolved theme.
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub price: Color,
    pub deal: Color,
    pub favorite: Color,
}

pub const DARK: Palette = Palette {
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x4a, 0xde, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight_bg: Color::Rgb(0x26, 0x26, 0x26),
    price: Color::Rgb(0x86, 0xef, 0xac),
    deal: Color::Rgb(0xf8, 0x71, 0x71),
    favorite: Color::Rgb(0xf4, 0x72, 0xb6),
};

pub const LIGHT: Palette = Palette {
    text: Color::Rgb(0x1f, 0x29, 0x37),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x15, 0x80, 0x3d),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
    price: Color::Rgb(0x15, 0x80, 0x3d),
    deal: Color::Rgb(0xb9, 0x1c, 0x1c),
    favorite: Color::Rgb(0xbe, 0x18, 0x5d),
};

/// Maps the user preference to a palette. `System` defers to the
/// terminal default.
pub fn resolve(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark | ThemeMode::System => &DARK,
    }
}
