use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;

/// The part of the complex plane currently mapped onto the display grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewWindow {
    region: ComplexRect,
    pixel_rect: PixelRect,
}

impl ViewWindow {
    #[must_use]
    pub fn new(region: ComplexRect, pixel_rect: PixelRect) -> Self {
        Self { region, pixel_rect }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    pub fn set_region(&mut self, region: ComplexRect) {
        self.region = region;
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.region.top_left().real
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.region.bottom_right().real
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.region.top_left().imag
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.region.bottom_right().imag
    }
}
