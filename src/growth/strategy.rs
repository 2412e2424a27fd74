/// Policy which determines the new capacity of an elastic container whenever
/// it needs more room.
///
/// Given the `current` capacity and the `required` capacity, the strategy returns
/// the next capacity. A strategy never returns less than `current`; however, it
/// is allowed to return less than `required`. The latter is a legitimate answer
/// meaning that the strategy refuses to grow enough, and the container reports it
/// as a full container on insertion.
///
/// # Possible Strategies
///
/// * [`Doubling`]: `max(2 * current, required)`.
/// * [`Golden`]: `max(1.5 * current, required)`; the default strategy.
/// * [`Exact`]: `required`.
/// * [`NoGrowth`]: `current`; turns an elastic container into a bounded one.
/// * [`Linear`]: `max(current + step, required)`.
/// * [`Geometric`]: `max(factor * current, required)`.
///
/// Further, any `Fn(usize, usize) -> usize` is a growth strategy.
///
/// ```
/// use orx_capability_col::GrowthStrategy;
///
/// let quadruple = |current: usize, required: usize| (current * 4).max(required);
/// assert_eq!(quadruple.next_bound(10, 11), 40);
/// ```
///
/// [`Doubling`]: crate::Doubling
/// [`Golden`]: crate::Golden
/// [`Exact`]: crate::Exact
/// [`NoGrowth`]: crate::NoGrowth
/// [`Linear`]: crate::Linear
/// [`Geometric`]: crate::Geometric
pub trait GrowthStrategy {
    /// Returns the capacity to grow to from `current` capacity when at least
    /// `required` capacity is needed.
    fn next_bound(&self, current: usize, required: usize) -> usize;
}

impl<F> GrowthStrategy for F
where
    F: Fn(usize, usize) -> usize,
{
    #[inline(always)]
    fn next_bound(&self, current: usize, required: usize) -> usize {
        self(current, required)
    }
}
