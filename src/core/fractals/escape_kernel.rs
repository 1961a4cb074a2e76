//! Escape-time iteration of `z -> z² + c`.
//!
//! Both kernels run once per pixel per render, so they stay on scalar `f64` locals and never
//! allocate.

use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;

/// Squared escape radius. An orbit with `|z|² > 4` is guaranteed to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterations between snapshots of the orbit used by [`escape_time_periodic`].
pub const PERIODICITY_CHECK_INTERVAL: u32 = 20;

/// Iterates from `z0` with parameter `c` until `|z|² > 4` or `max_iterations` steps are taken.
///
/// `count` on an escaped result is the number of steps applied before the escape was seen, so a
/// starting point already outside the radius escapes at `0`.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> IterationResult {
    let (mut real, mut imag) = (z0.real, z0.imag);
    let mut real_sq = real * real;
    let mut imag_sq = imag * imag;

    for iteration in 0..max_iterations {
        if real_sq + imag_sq > ESCAPE_RADIUS_SQUARED {
            return IterationResult::escaped_at(iteration);
        }

        imag = (real + real) * imag + c.imag;
        real = real_sq - imag_sq + c.real;
        real_sq = real * real;
        imag_sq = imag * imag;
    }

    if real_sq + imag_sq > ESCAPE_RADIUS_SQUARED {
        IterationResult::escaped_at(max_iterations)
    } else {
        IterationResult::bounded(max_iterations)
    }
}

/// [`escape_time`] with early exit for orbits that repeat exactly.
///
/// A snapshot of `z` is refreshed every [`PERIODICITY_CHECK_INTERVAL`] steps. Meeting the
/// snapshot again means the orbit is a cycle and can never escape, so the result is identical
/// to the plain kernel.
#[must_use]
pub fn escape_time_periodic(z0: Complex, c: Complex, max_iterations: u32) -> IterationResult {
    let (mut real, mut imag) = (z0.real, z0.imag);
    let mut real_sq = real * real;
    let mut imag_sq = imag * imag;
    let (mut snapshot_real, mut snapshot_imag) = (real, imag);
    let mut since_snapshot = 0;

    for iteration in 0..max_iterations {
        if real_sq + imag_sq > ESCAPE_RADIUS_SQUARED {
            return IterationResult::escaped_at(iteration);
        }

        imag = (real + real) * imag + c.imag;
        real = real_sq - imag_sq + c.real;
        real_sq = real * real;
        imag_sq = imag * imag;

        if real == snapshot_real && imag == snapshot_imag {
            return IterationResult::bounded(max_iterations);
        }

        since_snapshot += 1;
        if since_snapshot == PERIODICITY_CHECK_INTERVAL {
            since_snapshot = 0;
            snapshot_real = real;
            snapshot_imag = imag;
        }
    }

    if real_sq + imag_sq > ESCAPE_RADIUS_SQUARED {
        IterationResult::escaped_at(max_iterations)
    } else {
        IterationResult::bounded(max_iterations)
    }
}

/// Mandelbrot orbit of `c`, starting from `0`.
#[inline]
#[must_use]
pub fn mandelbrot_escape_time(
    c: Complex,
    max_iterations: u32,
    periodicity_check: bool,
) -> IterationResult {
    if periodicity_check {
        escape_time_periodic(Complex::ZERO, c, max_iterations)
    } else {
        escape_time(Complex::ZERO, c, max_iterations)
    }
}

/// Julia orbit of `z0` for the fixed parameter `c`.
#[inline]
#[must_use]
pub fn julia_escape_time(z0: Complex, c: Complex, max_iterations: u32) -> IterationResult {
    escape_time(z0, c, max_iterations)
}
