pub mod colour_pair;
pub mod key_input;
pub mod surface;
