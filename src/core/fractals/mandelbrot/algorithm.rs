use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::classification::Classification;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ESCAPE_RADIUS, ITERATIONS};
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};

/// Runs `z = z² + c` from `z = 0` for exactly [`ITERATIONS`] steps and
/// classifies `c` by the magnitude of the final `z`.
///
/// Divergent orbits overflow to infinity or NaN long before the last step;
/// neither compares `<=` to the escape radius, so both classify as escaped.
#[must_use]
pub fn evaluate(c: Complex) -> Classification {
    let mut z = Complex::ZERO;

    for _ in 0..ITERATIONS {
        z = z * z + c;
    }

    if z.magnitude() <= ESCAPE_RADIUS {
        Classification::Member
    } else {
        Classification::Escaped
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Classification;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(evaluate(c))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(window: &ViewWindow) -> Self {
        Self {
            pixel_rect: window.pixel_rect(),
            complex_rect: window.region(),
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
