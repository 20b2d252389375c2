pub mod cell_buffer;
pub mod complex;
pub mod complex_rect;
pub mod pixel_rect;
pub mod point;
pub mod view_window;
