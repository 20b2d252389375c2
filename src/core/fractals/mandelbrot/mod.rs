pub mod algorithm;
pub mod classification;
pub mod glyph_map;
pub mod mandelbrot_config;
