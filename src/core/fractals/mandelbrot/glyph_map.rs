use crate::core::actions::generate_cell_buffer::ports::glyph_map::GlyphMap;
use crate::core::data::cell_buffer::Cell;
use crate::core::fractals::mandelbrot::classification::Classification;

/// Draws escaped points as a highlighted `X` and members of the set as blank
/// space, so the set shows up as the hole in the coloured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotGlyphMap {
    member: Cell,
    escaped: Cell,
}

impl Default for MandelbrotGlyphMap {
    fn default() -> Self {
        Self {
            member: Cell {
                glyph: ' ',
                highlighted: false,
            },
            escaped: Cell {
                glyph: 'X',
                highlighted: true,
            },
        }
    }
}

impl GlyphMap<Classification> for MandelbrotGlyphMap {
    fn map(&self, value: Classification) -> Cell {
        match value {
            Classification::Member => self.member,
            Classification::Escaped => self.escaped,
        }
    }
}
