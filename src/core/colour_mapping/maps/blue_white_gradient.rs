use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::progress;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

/// Bernstein-polynomial ramp from dark blue through white-ish highlights.
#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, result: IterationResult) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let t = progress(result.count, self.max_iterations);
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Colour { r, g, b }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_for_interior() {
        let mapper = BlueWhiteGradient::new(100);

        assert_eq!(mapper.map(IterationResult::bounded(100)), Colour::BLACK);
    }

    #[test]
    fn test_map_midpoint_gradient() {
        let mapper = BlueWhiteGradient::new(100);

        // t = 0.5: r = 9/16, g = 15/16, b = 8.5/16 of full scale.
        assert_eq!(
            mapper.map(IterationResult::escaped_at(50)),
            Colour { r: 143, g: 239, b: 135 }
        );
    }

    #[test]
    fn test_ends_of_the_ramp_are_black() {
        let mapper = BlueWhiteGradient::new(100);

        assert_eq!(mapper.map(IterationResult::escaped_at(0)), Colour::BLACK);
        assert_eq!(mapper.map(IterationResult::escaped_at(100)), Colour::BLACK);
    }
}
