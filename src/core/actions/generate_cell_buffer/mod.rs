pub mod generate_cell_buffer;
pub mod ports;
