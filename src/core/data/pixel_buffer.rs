use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::{BYTES_PER_PIXEL, PixelRect};
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} bounds",
        .pixel.x,
        .pixel.y,
        .pixel_rect.width(),
        .pixel_rect.height()
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA storage whose length is fixed by its [`PixelRect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates an opaque black buffer.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let mut buffer = vec![0; pixel_rect.buffer_len()];
        buffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|pixel| pixel.copy_from_slice(&Colour::BLACK.to_rgba()));

        Self { pixel_rect, buffer }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = pixel_rect.buffer_len();

        if pixel_rect_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable view for in-place writers. The slice cannot change length.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = self.pixel_rect.index_of(pixel) * BYTES_PER_PIXEL;
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let index = self.pixel_rect.index_of(pixel) * BYTES_PER_PIXEL;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}
