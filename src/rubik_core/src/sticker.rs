use std::fmt::Display;

use strum::EnumIter;

/// The color of a single sticker. Stickers carry no identity beyond their
/// color, so a face grid is simply a grid of `Color` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    /// The single letter used when rendering a face grid.
    #[must_use]
    pub fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.initial())
    }
}
