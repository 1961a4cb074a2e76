use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia::errors::julia::JuliaError;

const DEFAULT_MAX_ITERATIONS: u32 = 128;
const DEFAULT_OVERVIEW_MAX_ITERATIONS: u32 = 256;
const DEFAULT_ATTRACTION_SPEED: f64 = 0.01;
const DEFAULT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub c: Complex,
    pub scale: f64,
    pub max_iterations: u32,
    pub colour_map_kind: ColourMapKind,
    /// Fraction of the remaining distance to the attractor covered per tick, in `(0, 1]`.
    pub attraction_speed: f64,
    /// Paint the pixel under `c` black after each render.
    pub mark_locus: bool,
    /// Iteration cap of the Mandelbrot overview behind the Julia view.
    pub overview_max_iterations: u32,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            c: Complex::new(1.0, 0.0),
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: ColourMapKind::default(),
            attraction_speed: DEFAULT_ATTRACTION_SPEED,
            mark_locus: true,
            overview_max_iterations: DEFAULT_OVERVIEW_MAX_ITERATIONS,
        }
    }
}

impl JuliaConfig {
    /// Default settings around the parameter `c` at the given scale.
    #[must_use]
    pub fn with_parameter(c: Complex, scale: f64) -> Self {
        Self {
            c,
            scale,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), JuliaError> {
        if self.max_iterations == 0 || self.overview_max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !self.c.is_finite() {
            return Err(JuliaError::NonFiniteParameter {
                real: self.c.real,
                imag: self.c.imag,
            });
        }

        if !(self.attraction_speed > 0.0 && self.attraction_speed <= 1.0) {
            return Err(JuliaError::InvalidAttractionSpeed(self.attraction_speed));
        }

        Ok(())
    }
}
