use crate::core::actions::generate_cell_buffer::ports::glyph_map::GlyphMap;
use crate::core::data::cell_buffer::{Cell, CellBuffer, CellBufferError};
use crate::core::data::pixel_rect::PixelRect;

/// Builds a frame by mapping one computed value per cell to its glyph.
///
/// `input` must hold exactly one value per cell of `pixel_rect`, in
/// row-major order.
pub fn generate_cell_buffer<T, GMap: GlyphMap<T>>(
    input: Vec<T>,
    mapper: &GMap,
    pixel_rect: PixelRect,
) -> Result<CellBuffer, CellBufferError> {
    let cells: Vec<Cell> = input.into_iter().map(|value| mapper.map(value)).collect();

    CellBuffer::from_cells(pixel_rect, cells)
}
