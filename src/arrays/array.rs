use crate::{Indexed, ReadableAt, Swappable, Writable};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Contiguous, index-addressed storage with a physical capacity.
///
/// This is a closed set: only [`FixedArray`] and [`ElasticArray`] implement it.
/// Generic code may depend on the capabilities every array has in common without
/// caring whether the array can change its size.
///
/// ```
/// use orx_capability_col::prelude::*;
/// use orx_capability_col::{Array, ElasticArray, FixedArray};
///
/// fn reverse<A: Array<char>>(array: &mut A) {
///     let len = array.len();
///     for i in 0..len / 2 {
///         array.swap(i, len - 1 - i).unwrap();
///     }
/// }
///
/// let mut fixed = FixedArray::of(['a', 'b', 'c']);
/// reverse(&mut fixed);
/// assert_eq!(fixed.read(0, |x| *x), Ok('c'));
///
/// let mut elastic = ElasticArray::of(['a', 'b', 'c', 'd']);
/// reverse(&mut elastic);
/// assert_eq!(elastic.read(3, |x| *x), Ok('a'));
/// ```
///
/// [`FixedArray`]: crate::FixedArray
/// [`ElasticArray`]: crate::ElasticArray
pub trait Array<T>: sealed::Sealed + Indexed + ReadableAt<T> + Writable<T> + Swappable<T> {
    /// Number of allocated positions, which is never less than [`len`].
    ///
    /// [`len`]: crate::Indexed::len
    fn capacity(&self) -> usize;
}
