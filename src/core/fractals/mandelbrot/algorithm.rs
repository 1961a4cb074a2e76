use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_kernel::mandelbrot_escape_time;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    periodicity_check: bool,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, pixel: Point) -> IterationResult {
        let c = self
            .viewport
            .pixel_to_complex(f64::from(pixel.x), f64::from(pixel.y));

        mandelbrot_escape_time(c, self.max_iterations, self.periodicity_check)
    }

    fn pixel_rect(&self) -> PixelRect {
        self.viewport.pixel_rect()
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        max_iterations: u32,
        periodicity_check: bool,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            viewport,
            max_iterations,
            periodicity_check,
        })
    }
}
