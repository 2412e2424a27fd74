use super::strategy::GrowthStrategy;

/// Strategy multiplying the capacity by a constant `factor`; or jumping directly
/// to the required capacity if it is larger.
///
/// Factors less than one never shrink the capacity; they behave as [`Exact`].
///
/// [`Exact`]: crate::Exact
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometric {
    factor: f64,
}

impl Geometric {
    /// Creates a geometric strategy multiplying the capacity by `factor` on each growth.
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Multiplier applied on each growth.
    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

impl GrowthStrategy for Geometric {
    fn next_bound(&self, current: usize, required: usize) -> usize {
        // float to int casts saturate, NaN maps to zero
        let scaled = (current as f64 * self.factor) as usize;
        scaled.max(required).max(current)
    }
}
