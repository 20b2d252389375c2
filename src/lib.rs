mod controllers;
mod core;
mod presenters;

pub use crate::controllers::interactive::{
    ControllerError, DisplaySurface, FrameData, InteractiveController, KeyInput, ViewerConfig,
};
pub use crate::core::actions::generate_cell_buffer::generate_cell_buffer::generate_cell_buffer;
pub use crate::core::actions::generate_cell_buffer::ports::glyph_map::GlyphMap;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
#[cfg(feature = "parallel")]
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::cell_buffer::{Cell, CellBuffer, CellBufferError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_window::ViewWindow;
pub use crate::core::fractals::mandelbrot::algorithm::{evaluate, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::classification::Classification;
pub use crate::core::fractals::mandelbrot::glyph_map::MandelbrotGlyphMap;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, ESCAPE_RADIUS, ITERATIONS};
pub use crate::core::navigation::{handle_key, navigate, NavigationOutcome, NavigationSteps, ViewCommand};
pub use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};
pub use crate::presenters::terminal::colour_pair::ColourPair;
pub use crate::presenters::terminal::surface::TerminalSurface;
