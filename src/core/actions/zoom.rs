use crate::core::data::viewport::{Viewport, ViewportError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomError {
    #[error("zoom factor must be finite and greater than zero: {0}")]
    InvalidFactor(f64),
    #[error("zoom would move scale to {scale}, outside [{min_scale}, {max_scale}]")]
    ScaleOutOfRange {
        scale: f64,
        min_scale: f64,
        max_scale: f64,
    },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Bounds on the viewport scale reachable through zooming.
///
/// The lower bound keeps neighbouring pixels distinguishable in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 1e-13,
            max_scale: 1e4,
        }
    }
}

impl ZoomLimits {
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&scale)
    }

    /// Whether moving from `current` to `next` is allowed.
    ///
    /// A viewport that already sits outside the limits may still move back toward them.
    #[must_use]
    pub fn permits(&self, current: f64, next: f64) -> bool {
        if next > self.max_scale {
            return next <= current;
        }

        if next < self.min_scale {
            return next >= current;
        }

        true
    }
}

/// Recentres on the pixel position `(x, y)` and divides the scale by `factor`.
///
/// The target is resolved under `viewport` before anything changes, and the replacement is
/// built in one step, so center and scale are never observed half-updated. On error the caller
/// keeps its old viewport. A result outside `limits` is rejected only when it lies further out
/// than the current scale.
pub fn zoom_viewport(
    viewport: &Viewport,
    x: f64,
    y: f64,
    factor: f64,
    limits: &ZoomLimits,
) -> Result<Viewport, ZoomError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ZoomError::InvalidFactor(factor));
    }

    let target = viewport.pixel_to_complex(x, y);
    let scale = viewport.scale() / factor;

    if !limits.permits(viewport.scale(), scale) {
        return Err(ZoomError::ScaleOutOfRange {
            scale,
            min_scale: limits.min_scale,
            max_scale: limits.max_scale,
        });
    }

    Ok(viewport.recentred(target, scale)?)
}
