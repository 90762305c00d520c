use crate::color::{Color, NamedColor};

/// Ordered set of selectable colors; insertion order is preserved and
/// duplicates are suppressed by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Build a palette from a sequence, dropping repeated entries
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut palette = Self::new();
        for color in colors {
            palette.add(color);
        }
        palette
    }

    /// Append `color` unless it is already present. Returns whether it was added.
    pub fn add(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_colors(NamedColor::ALL.into_iter().map(Color::Named))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.colors()[0], Color::BLACK);
        assert_eq!(palette.colors()[1], Color::RED);
        assert_eq!(palette.colors()[7], Color::WHITE);
    }

    #[test]
    fn test_custom_colors_append_once() {
        let mut palette = Palette::default();
        let teal = Color::Custom([0x11, 0x88, 0x88]);

        assert!(palette.add(teal));
        assert!(!palette.add(teal));
        assert!(!palette.add(Color::RED));

        // Latest addition is last, nothing duplicated
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.colors().last(), Some(&teal));
    }
}
