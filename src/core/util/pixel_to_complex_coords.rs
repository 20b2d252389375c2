use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linear map from a screen cell to the complex plane. Column `0` lands on
/// the minimum real bound and column `width` on the maximum; rows map onto
/// the imaginary axis the same way.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.spans_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let column = f64::from(pixel_position.x);
    let row = f64::from(pixel_position.y);
    let real = complex_rect.top_left().real
        + complex_rect.width() * column / f64::from(pixel_rect.width());
    let imag = complex_rect.top_left().imag
        + complex_rect.height() * row / f64::from(pixel_rect.height());

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_region() -> ComplexRect {
        ComplexRect::new(
            Complex { real: -2.0, imag: -1.0 },
            Complex { real: 1.0, imag: 1.0 },
        )
        .unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let pixel_rect = PixelRect::new(80, 24).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, default_region());

        assert_eq!(result, Ok(Complex { real: -2.0, imag: -1.0 }));
    }

    #[test]
    fn test_pixel_to_complex_far_corner() {
        let pixel_rect = PixelRect::new(80, 24).unwrap();

        let result = pixel_to_complex_coords(Point { x: 80, y: 24 }, pixel_rect, default_region());

        assert_eq!(result, Ok(Complex { real: 1.0, imag: 1.0 }));
    }

    #[test]
    fn test_pixel_to_complex_centre() {
        let pixel_rect = PixelRect::new(80, 24).unwrap();

        let result = pixel_to_complex_coords(Point { x: 40, y: 12 }, pixel_rect, default_region());

        assert_eq!(result, Ok(Complex { real: -0.5, imag: 0.0 }));
    }

    #[test]
    fn test_corners_map_to_bounds_for_odd_sizes() {
        let pixel_rect = PixelRect::new(131, 37).unwrap();
        let complex_rect = ComplexRect::new(
            Complex { real: -0.7435, imag: 0.1312 },
            Complex { real: -0.7402, imag: 0.1339 },
        )
        .unwrap();

        let origin = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, complex_rect).unwrap();
        let corner = pixel_to_complex_coords(Point { x: 131, y: 37 }, pixel_rect, complex_rect).unwrap();

        assert_eq!(origin, complex_rect.top_left());
        assert!((corner.real - complex_rect.bottom_right().real).abs() < 1e-12);
        assert!((corner.imag - complex_rect.bottom_right().imag).abs() < 1e-12);
    }

    #[test]
    fn test_real_part_grows_with_column() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let region = default_region();

        let left = pixel_to_complex_coords(Point { x: 2, y: 5 }, pixel_rect, region).unwrap();
        let right = pixel_to_complex_coords(Point { x: 7, y: 5 }, pixel_rect, region).unwrap();

        assert!(left.real < right.real);
        assert_eq!(left.imag, right.imag);
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let point1 = Point { x: 101, y: 50 };
        let point2 = Point { x: -10, y: -10 };

        assert_eq!(
            pixel_to_complex_coords(point1, pixel_rect, default_region()),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point1,
                pixel_rect
            })
        );
        assert_eq!(
            pixel_to_complex_coords(point2, pixel_rect, default_region()),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point2,
                pixel_rect
            })
        );
    }
}
