use crate::core::data::{complex::Complex, complex_rect::ComplexRect};

/// Every point is iterated exactly this many times; there is no early exit.
pub const ITERATIONS: u32 = 200;

/// Points whose final magnitude is at most this are members of the set.
pub const ESCAPE_RADIUS: f64 = 2.0;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(
        Complex {
            real: -2.0,
            imag: -1.0,
        },
        Complex {
            real: 1.0,
            imag: 1.0,
        },
    )
    .expect("default fractal region is valid")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}
