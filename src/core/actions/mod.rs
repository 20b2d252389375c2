pub mod generate_cell_buffer;
pub mod generate_fractal;
