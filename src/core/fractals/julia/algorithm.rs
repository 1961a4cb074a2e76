use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_kernel::julia_escape_time;
use crate::core::fractals::julia::errors::julia::JuliaError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    viewport: Viewport,
    c: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, pixel: Point) -> IterationResult {
        let z = self
            .viewport
            .pixel_to_complex(f64::from(pixel.x), f64::from(pixel.y));

        julia_escape_time(z, self.c, self.max_iterations)
    }

    fn pixel_rect(&self) -> PixelRect {
        self.viewport.pixel_rect()
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    pub fn new(viewport: Viewport, c: Complex, max_iterations: u32) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !c.is_finite() {
            return Err(JuliaError::NonFiniteParameter {
                real: c.real,
                imag: c.imag,
            });
        }

        Ok(Self {
            viewport,
            c,
            max_iterations,
        })
    }
}
