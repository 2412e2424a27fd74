use super::strategy::GrowthStrategy;

/// Strategy growing the capacity by half of itself; or jumping directly to the
/// required capacity if it is larger.
///
/// This is the default strategy of elastic arrays.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Golden;

impl GrowthStrategy for Golden {
    #[inline(always)]
    fn next_bound(&self, current: usize, required: usize) -> usize {
        current.saturating_add(current / 2).max(required)
    }
}
