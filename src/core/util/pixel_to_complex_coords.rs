use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;

/// Plane units covered by one pixel when the shorter side spans `2 * scale`.
#[must_use]
pub fn units_per_pixel(pixel_rect: PixelRect, scale: f64) -> f64 {
    let shorter_side = pixel_rect.width().min(pixel_rect.height());

    2.0 * scale / f64::from(shorter_side)
}

/// Maps a pixel position to the complex plane.
///
/// The buffer centre lands on `center`, `x` grows to the right along the real axis and `y`
/// grows downwards against the imaginary axis. Positions outside the grid are extrapolated.
#[must_use]
pub fn pixel_to_complex_coords(
    x: f64,
    y: f64,
    pixel_rect: PixelRect,
    center: Complex,
    scale: f64,
) -> Complex {
    let step = units_per_pixel(pixel_rect, scale);
    let half_width = f64::from(pixel_rect.width()) / 2.0;
    let half_height = f64::from(pixel_rect.height()) / 2.0;

    Complex {
        real: center.real + (x - half_width) * step,
        imag: center.imag + (half_height - y) * step,
    }
}

/// Inverse of [`pixel_to_complex_coords`].
#[must_use]
pub fn complex_to_pixel_coords(
    point: Complex,
    pixel_rect: PixelRect,
    center: Complex,
    scale: f64,
) -> (f64, f64) {
    let step = units_per_pixel(pixel_rect, scale);
    let half_width = f64::from(pixel_rect.width()) / 2.0;
    let half_height = f64::from(pixel_rect.height()) / 2.0;

    (
        half_width + (point.real - center.real) / step,
        half_height - (point.imag - center.imag) / step,
    )
}
