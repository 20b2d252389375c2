use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// One character of a rendered frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for CellBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for CellBufferError {}

/// A full frame of glyph cells in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    pixel_rect: PixelRect,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn from_cells(pixel_rect: PixelRect, cells: Vec<Cell>) -> Result<Self, CellBufferError> {
        let pixel_rect_size = pixel_rect.size() as usize;

        if pixel_rect_size != cells.len() {
            return Err(CellBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: cells.len(),
            });
        }

        Ok(Self { pixel_rect, cells })
    }

    /// Cells paired with their grid position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.pixel_rect.points().zip(self.cells.iter().copied())
    }
}
