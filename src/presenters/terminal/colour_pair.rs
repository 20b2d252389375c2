use crossterm::style::Color;

/// Foreground and background applied together to a highlighted glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourPair {
    pub foreground: Color,
    pub background: Color,
}

impl ColourPair {
    /// Solid red blocks for points outside the set.
    pub const ESCAPED: Self = Self {
        foreground: Color::Red,
        background: Color::Red,
    };
}

impl Default for ColourPair {
    fn default() -> Self {
        Self::ESCAPED
    }
}
