use super::strategy::GrowthStrategy;

/// Strategy growing the capacity by a constant `step`; or jumping directly to
/// the required capacity if it is larger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Linear {
    step: usize,
}

impl Linear {
    /// Creates a linear strategy growing by `step` positions at a time.
    pub const fn new(step: usize) -> Self {
        Self { step }
    }

    /// Number of positions added on each growth.
    pub const fn step(&self) -> usize {
        self.step
    }
}

impl GrowthStrategy for Linear {
    #[inline(always)]
    fn next_bound(&self, current: usize, required: usize) -> usize {
        current.saturating_add(self.step).max(required)
    }
}
