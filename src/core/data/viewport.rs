use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport scale must be finite and greater than zero: {0}")]
    InvalidScale(f64),
    #[error("viewport center must be finite: {}+{}i", .0.real, .0.imag)]
    NonFiniteCenter(Complex),
}

/// Aspect-correct mapping between a pixel grid and a region of the complex plane.
///
/// The shorter side of the grid spans `2 * scale` plane units around `center`. Values are
/// immutable; navigation builds a replacement viewport so center and scale always change
/// together.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: f64,
    pixel_rect: PixelRect,
}

impl Viewport {
    pub fn new(center: Complex, scale: f64, pixel_rect: PixelRect) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale(scale));
        }

        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter(center));
        }

        Ok(Self {
            center,
            scale,
            pixel_rect,
        })
    }

    /// Same pixel grid, new plane region.
    pub fn recentred(&self, center: Complex, scale: f64) -> Result<Self, ViewportError> {
        Self::new(center, scale, self.pixel_rect)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn pixel_to_complex(&self, x: f64, y: f64) -> Complex {
        pixel_to_complex_coords(x, y, self.pixel_rect, self.center, self.scale)
    }

    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> (f64, f64) {
        complex_to_pixel_coords(point, self.pixel_rect, self.center, self.scale)
    }

    /// Lowest and highest corners of the visible plane rectangle.
    #[must_use]
    pub fn plane_bounds(&self) -> (Complex, Complex) {
        let width = f64::from(self.pixel_rect.width());
        let height = f64::from(self.pixel_rect.height());
        let top_left = self.pixel_to_complex(0.0, 0.0);
        let bottom_right = self.pixel_to_complex(width, height);

        (
            Complex::new(top_left.real, bottom_right.imag),
            Complex::new(bottom_right.real, top_left.imag),
        )
    }

    /// Projects `point` onto the visible plane rectangle.
    #[must_use]
    pub fn clamp_to_plane(&self, point: Complex) -> Complex {
        let (min, max) = self.plane_bounds();

        Complex {
            real: point.real.clamp(min.real, max.real),
            imag: point.imag.clamp(min.imag, max.imag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(center: Complex, scale: f64, width: u32, height: u32) -> Viewport {
        Viewport::new(center, scale, PixelRect::new(width, height).unwrap()).unwrap()
    }

    #[test]
    fn test_viewport_rejects_non_positive_scale() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();

        assert_eq!(
            Viewport::new(Complex::ZERO, 0.0, pixel_rect),
            Err(ViewportError::InvalidScale(0.0))
        );
        assert_eq!(
            Viewport::new(Complex::ZERO, -1.0, pixel_rect),
            Err(ViewportError::InvalidScale(-1.0))
        );
        assert!(matches!(
            Viewport::new(Complex::ZERO, f64::NAN, pixel_rect),
            Err(ViewportError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_viewport_rejects_non_finite_center() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let center = Complex::new(f64::INFINITY, 0.0);

        assert_eq!(
            Viewport::new(center, 1.0, pixel_rect),
            Err(ViewportError::NonFiniteCenter(center))
        );
    }

    #[test]
    fn test_pixel_to_complex_uses_center_and_scale() {
        let view = viewport(Complex::new(1.0, -1.0), 0.5, 200, 100);

        assert_eq!(view.pixel_to_complex(100.0, 50.0), Complex::new(1.0, -1.0));
        assert_eq!(view.pixel_to_complex(100.0, 0.0), Complex::new(1.0, -0.5));
        assert_eq!(view.pixel_to_complex(0.0, 50.0), Complex::new(0.0, -1.0));
    }

    #[test]
    fn test_plane_bounds() {
        let view = viewport(Complex::ZERO, 1.0, 200, 100);
        let (min, max) = view.plane_bounds();

        assert_eq!(min, Complex::new(-2.0, -1.0));
        assert_eq!(max, Complex::new(2.0, 1.0));
    }

    #[test]
    fn test_clamp_to_plane() {
        let view = viewport(Complex::ZERO, 1.0, 100, 100);

        assert_eq!(
            view.clamp_to_plane(Complex::new(3.0, -0.5)),
            Complex::new(1.0, -0.5)
        );
        assert_eq!(
            view.clamp_to_plane(Complex::new(0.25, 0.5)),
            Complex::new(0.25, 0.5)
        );
    }

    #[test]
    fn test_recentred_keeps_pixel_rect() {
        let view = viewport(Complex::ZERO, 2.0, 64, 48);
        let moved = view.recentred(Complex::new(0.5, 0.5), 1.0).unwrap();

        assert_eq!(moved.pixel_rect(), view.pixel_rect());
        assert_eq!(moved.center(), Complex::new(0.5, 0.5));
        assert_eq!(moved.scale(), 1.0);
    }

    #[test]
    fn test_round_trip_through_viewport() {
        let view = viewport(Complex::new(-0.75, 0.1), 0.002, 256, 256);
        let z = view.pixel_to_complex(31.0, 200.0);
        let (x, y) = view.complex_to_pixel(z);

        assert!((x - 31.0).abs() < 1e-7);
        assert!((y - 200.0).abs() < 1e-7);
    }
}
