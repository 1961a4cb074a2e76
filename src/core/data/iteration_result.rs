/// Outcome of one escape-time orbit.
///
/// `escaped == false` means the orbit survived every allowed step and the point is treated as
/// part of the set; `count` is then equal to the iteration cap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct IterationResult {
    pub escaped: bool,
    pub count: u32,
}

impl IterationResult {
    #[must_use]
    pub const fn escaped_at(count: u32) -> Self {
        Self {
            escaped: true,
            count,
        }
    }

    #[must_use]
    pub const fn bounded(max_iterations: u32) -> Self {
        Self {
            escaped: false,
            count: max_iterations,
        }
    }
}
