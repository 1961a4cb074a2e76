use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, generate_fractal,
};
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_result::IterationResult;

/// How the per-pixel kernel is scheduled. Both strategies produce identical grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Sequential,
    #[default]
    Rayon,
}

impl RenderStrategy {
    pub fn generate<Alg>(
        self,
        algorithm: &Alg,
        cells: &mut [IterationResult],
    ) -> Result<(), GenerateFractalError>
    where
        Alg: FractalAlgorithm + Sync,
    {
        match self {
            Self::Sequential => generate_fractal(algorithm, cells),
            Self::Rayon => generate_fractal_rayon(algorithm, cells),
        }
    }
}
