use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive and addressable: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Fixed-size pixel grid anchored at the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let addressable = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .is_some();

        if width == 0 || height == 0 || !addressable {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.size() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major cell index of `point`.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    /// Pins a pointer position to `[0, width] x [0, height]`.
    ///
    /// The closed upper bound matches what hosts deliver for the far canvas edge. NaN collapses
    /// to the origin.
    #[must_use]
    pub fn clamp_position(&self, x: f64, y: f64) -> (f64, f64) {
        let clamp = |value: f64, max: u32| {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, f64::from(max))
            }
        };

        (clamp(x, self.width), clamp(y, self.height))
    }

    #[must_use]
    pub fn contains_position(&self, x: f64, y: f64) -> bool {
        (0.0..=f64::from(self.width)).contains(&x) && (0.0..=f64::from(self.height)).contains(&y)
    }
}
