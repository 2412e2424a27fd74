use super::strategy::GrowthStrategy;

/// Strategy doubling the capacity; or jumping directly to the required capacity if it is larger.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doubling;

impl GrowthStrategy for Doubling {
    #[inline(always)]
    fn next_bound(&self, current: usize, required: usize) -> usize {
        current.saturating_mul(2).max(required)
    }
}
