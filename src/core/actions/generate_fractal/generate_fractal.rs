use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateFractalError {
    #[error("cell grid holds {actual} results but the pixel rect needs {expected}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// Fills `cells` row-major with one result per pixel of the algorithm's pixel rect.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    cells: &mut [IterationResult],
) -> Result<(), GenerateFractalError> {
    let pixel_rect = algorithm.pixel_rect();
    check_cell_count(pixel_rect.size(), cells.len())?;

    let width = pixel_rect.width() as usize;
    for (y, row) in cells.chunks_exact_mut(width).enumerate() {
        fill_row(algorithm, y as u32, row);
    }

    Ok(())
}

pub(crate) fn check_cell_count(expected: usize, actual: usize) -> Result<(), GenerateFractalError> {
    if expected != actual {
        return Err(GenerateFractalError::CellCountMismatch { expected, actual });
    }

    Ok(())
}

#[inline]
pub(crate) fn fill_row<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
    y: u32,
    row: &mut [IterationResult],
) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = algorithm.compute(Point { x: x as u32, y });
    }
}
