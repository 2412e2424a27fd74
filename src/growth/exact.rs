use super::strategy::GrowthStrategy;

/// Strategy growing exactly to the required capacity.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exact;

impl GrowthStrategy for Exact {
    #[inline(always)]
    fn next_bound(&self, current: usize, required: usize) -> usize {
        required.max(current)
    }
}
