use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, check_cell_count, fill_row,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_result::IterationResult;

/// Row-parallel [`generate_fractal`](super::generate_fractal::generate_fractal).
///
/// Each rayon task owns one row of `cells`, so results land in place without collecting.
pub fn generate_fractal_rayon<Alg>(
    algorithm: &Alg,
    cells: &mut [IterationResult],
) -> Result<(), GenerateFractalError>
where
    Alg: FractalAlgorithm + Sync,
{
    let pixel_rect = algorithm.pixel_rect();
    check_cell_count(pixel_rect.size(), cells.len())?;

    let width = pixel_rect.width() as usize;
    cells
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| fill_row(algorithm, y as u32, row));

    Ok(())
}
