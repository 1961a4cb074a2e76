use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Per-pixel escape-time computation. Implementors are stateless per call so pixels can be
/// evaluated in any order and on any thread.
pub trait FractalAlgorithm {
    fn compute(&self, pixel: Point) -> IterationResult;

    fn pixel_rect(&self) -> PixelRect;

    fn max_iterations(&self) -> u32;
}
