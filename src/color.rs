use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed palette colors with a stable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
    Cyan,
    White,
}

impl NamedColor {
    /// All named colors, in the order the default palette lists them
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Pink,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Pink => "pink",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Black => [0x00, 0x00, 0x00],
            NamedColor::Red => [0xef, 0x44, 0x44],
            NamedColor::Green => [0x22, 0xc5, 0x5e],
            NamedColor::Blue => [0x3b, 0x82, 0xf6],
            NamedColor::Yellow => [0xea, 0xb3, 0x08],
            NamedColor::Pink => [0xec, 0x48, 0x99],
            NamedColor::Cyan => [0x06, 0xb6, 0xd4],
            NamedColor::White => [0xff, 0xff, 0xff],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

/// A concrete (non-transparent) color token.
///
/// Named and custom colors are distinct tokens even when they resolve to the
/// same RGB value, so `Named(Black)` and `Custom([0, 0, 0])` compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Named(NamedColor),
    Custom([u8; 3]),
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);
    pub const RED: Color = Color::Named(NamedColor::Red);
    pub const GREEN: Color = Color::Named(NamedColor::Green);
    pub const BLUE: Color = Color::Named(NamedColor::Blue);

    /// Parse a `#rrggbb` string (case-insensitive) into a custom color
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Color::Custom([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Custom(rgb) => rgb,
        }
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.rgb();
        Color32::from_rgb(r, g, b)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Custom(_) => f.write_str(&self.to_hex()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognised color '{0}' (expected a palette name or #rrggbb)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NamedColor::from_name(trimmed)
            .map(Color::Named)
            .or_else(|| Color::from_hex(trimmed))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The value held by one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Transparent,
    Painted(Color),
}

impl Cell {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Cell::Transparent)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Transparent => None,
            Cell::Painted(color) => Some(*color),
        }
    }

    /// Resolve to a display color; transparent cells map to `Color32::TRANSPARENT`
    pub fn to_color32(&self) -> Color32 {
        self.color().map_or(Color32::TRANSPARENT, Color::to_color32)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Painted(color)
    }
}

impl From<NamedColor> for Cell {
    fn from(named: NamedColor) -> Self {
        Cell::Painted(Color::Named(named))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_resolve_to_table_values() {
        assert_eq!(NamedColor::Red.rgb(), [0xef, 0x44, 0x44]);
        assert_eq!(NamedColor::Cyan.rgb(), [0x06, 0xb6, 0xd4]);
        assert_eq!(Color::WHITE.to_color32(), Color32::WHITE);
    }

    #[test]
    fn test_parse_accepts_names_and_hex() {
        assert_eq!("pink".parse::<Color>(), Ok(Color::Named(NamedColor::Pink)));
        assert_eq!("Blue".parse::<Color>(), Ok(Color::Named(NamedColor::Blue)));
        assert_eq!(
            "#A0b1C2".parse::<Color>(),
            Ok(Color::Custom([0xa0, 0xb1, 0xc2]))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_hex() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#12345g".parse::<Color>().is_err());
        assert!("123456".parse::<Color>().is_err());
        assert!("magenta".parse::<Color>().is_err());
    }

    #[test]
    fn test_custom_color_displays_as_lowercase_hex() {
        let color = Color::Custom([0xAB, 0x00, 0x0F]);
        assert_eq!(color.to_string(), "#ab000f");
        assert_eq!(Color::RED.to_string(), "red");
    }

    #[test]
    fn test_named_and_custom_tokens_are_distinct() {
        // Same RGB, different token
        assert_ne!(Color::BLACK, Color::Custom([0, 0, 0]));
        assert_eq!(Color::BLACK.rgb(), Color::Custom([0, 0, 0]).rgb());
    }

    #[test]
    fn test_transparent_cell_resolves_to_transparent() {
        assert!(Cell::default().is_transparent());
        assert_eq!(Cell::Transparent.to_color32(), Color32::TRANSPARENT);
        assert_eq!(Cell::from(Color::RED).color(), Some(Color::RED));
    }
}
