use crate::core::data::cell_buffer::Cell;

pub trait GlyphMap<T> {
    fn map(&self, value: T) -> Cell;
}
