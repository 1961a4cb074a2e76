use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use std::f64::consts::PI;

const CHANNEL_FREQUENCIES: [f64; 3] = [1.0, 3.0, 5.0];

/// White at zero iterations, each channel falling and rising along its own cosine.
#[derive(Debug)]
pub struct CosineRamp {
    max_iterations: u32,
    phase_step: f64,
}

impl ColourMap for CosineRamp {
    fn map(&self, result: IterationResult) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let phase = f64::from(result.count.min(self.max_iterations)) * self.phase_step;
        let [r, g, b] = CHANNEL_FREQUENCIES.map(|frequency| {
            255 - (127.5 * (1.0 - (phase * frequency).cos())) as u8
        });

        Colour { r, g, b }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::CosineRamp
    }
}

impl CosineRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        let half_periods = max_iterations.saturating_sub(1).max(1);

        Self {
            max_iterations,
            phase_step: PI / f64::from(half_periods),
        }
    }
}
