pub mod blue_white_gradient;
pub mod cosine_ramp;
pub mod fire_gradient;
pub mod grayscale;

/// Position of an escape count within `[0, max_iterations]`, as a fraction in `[0, 1]`.
///
/// Counts above the cap are pinned to it.
pub(crate) fn progress(count: u32, max_iterations: u32) -> f64 {
    if max_iterations == 0 {
        return 1.0;
    }

    f64::from(count.min(max_iterations)) / f64::from(max_iterations)
}
