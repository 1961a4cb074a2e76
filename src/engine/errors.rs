use crate::core::actions::generate_fractal::generate_fractal::GenerateFractalError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::zoom::ZoomError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    Julia(#[from] JuliaError),
    #[error(transparent)]
    Zoom(#[from] ZoomError),
    #[error("fractal generation failed: {0}")]
    GenerateFractal(#[from] GenerateFractalError),
    #[error("colouring failed: {0}")]
    GeneratePixelBuffer(#[from] GeneratePixelBufferError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}
