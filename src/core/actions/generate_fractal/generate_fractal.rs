use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Computes every cell of `pixel_rect` in row-major order, stopping at the
/// first failure.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
