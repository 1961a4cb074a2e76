use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::progress;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

#[derive(Debug)]
pub struct Grayscale {
    max_iterations: u32,
}

impl ColourMap for Grayscale {
    fn map(&self, result: IterationResult) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let level = (progress(result.count, self.max_iterations) * 255.0) as u8;

        Colour {
            r: level,
            g: level,
            b: level,
        }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Grayscale
    }
}

impl Grayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
