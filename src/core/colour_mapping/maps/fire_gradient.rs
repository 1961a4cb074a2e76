use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::progress;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap for FireGradient {
    fn map(&self, result: IterationResult) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let t = progress(result.count, self.max_iterations);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
