use crate::core::data::complex::Complex;

/// Remaining distance below which `c` is placed exactly on the attractor.
pub const SNAP_DISTANCE: f64 = 1e-12;

/// Julia parameter `c` and the point it is being drawn towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractorState {
    pub c: Complex,
    pub attractor: Complex,
}

impl AttractorState {
    /// `c` with the attractor sitting on it, so ticking does nothing until a target is set.
    #[must_use]
    pub fn at_rest(c: Complex) -> Self {
        Self { c, attractor: c }
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.c.distance_to(self.attractor)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.c == self.attractor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttractorStepReport {
    pub moved: bool,
    pub snapped: bool,
}

/// Moves `c` a fraction `speed` of the way to the attractor.
///
/// The remaining distance shrinks by `1 - speed` per step. A step that would leave `c` within
/// [`SNAP_DISTANCE`], or that rounding prevents from getting any closer, lands on the attractor
/// instead, so the distance strictly decreases until it reaches zero.
pub fn step_attractor(state: &mut AttractorState, speed: f64) -> AttractorStepReport {
    let mut report = AttractorStepReport::default();

    if state.is_settled() {
        return report;
    }

    let distance = state.distance();
    let next = state.c + (state.attractor - state.c).scale(speed);
    let next_distance = next.distance_to(state.attractor);

    if next_distance < SNAP_DISTANCE || next_distance >= distance {
        state.c = state.attractor;
        report.snapped = true;
    } else {
        state.c = next;
    }

    report.moved = true;
    report
}
