use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::complex::Complex;

const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub center: Complex,
    pub scale: f64,
    pub max_iterations: u32,
    pub colour_map_kind: ColourMapKind,
    pub periodicity_check: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: ColourMapKind::default(),
            periodicity_check: true,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn with_max_iterations(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_frames_the_whole_set() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.center, Complex::ZERO);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.max_iterations, 256);
        assert_eq!(config.colour_map_kind, ColourMapKind::CosineRamp);
        assert!(config.periodicity_check);
    }

    #[test]
    fn test_with_max_iterations_keeps_other_defaults() {
        let config = MandelbrotConfig::with_max_iterations(100);

        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.center, Complex::ZERO);
        assert_eq!(config.scale, 2.0);
    }
}
