use super::strategy::GrowthStrategy;

/// A do-nothing strategy which never grows the capacity.
///
/// An elastic container using this strategy behaves as a bounded container:
/// it becomes full as soon as its initial capacity is used up, and any further
/// insertion fails with [`ContainerError::Full`].
///
/// [`ContainerError::Full`]: crate::ContainerError::Full
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoGrowth;

impl GrowthStrategy for NoGrowth {
    #[inline(always)]
    fn next_bound(&self, current: usize, _required: usize) -> usize {
        current
    }
}
