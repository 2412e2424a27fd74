use super::{Array, Slots, array::sealed::Sealed};
use crate::{
    Bounded, Container, ContainerError, Elastic, Golden, GrowthStrategy, Indexed, Insertable,
    InsertableAt, Queryable, ReadableAt, Removable, RemovableAt, Result, Searchable, Swappable,
    Writable,
};
use alloc::vec::Vec;

/// Capacity of an elastic array created without an explicit bound.
pub const DEFAULT_BOUND: usize = 10;

/// Contiguous storage with a logical size that may be less than its capacity,
/// growing on demand as decided by its growth strategy `G`.
///
/// Elements occupy positions `0..len`; all index-taking operations are checked
/// against `len`, never against the capacity.
///
/// Growing relocates the elements into a new store. Elements are therefore only
/// reachable through their positions and never by addresses into the storage.
///
/// ```
/// use orx_capability_col::prelude::*;
/// use orx_capability_col::{ContainerError, ElasticArray, NoGrowth};
///
/// let mut array = ElasticArray::with_bound_using(2, NoGrowth);
/// array.append('a').unwrap();
/// array.insert(0, 'b').unwrap();
///
/// assert!(array.is_full());
/// assert_eq!(array.append('c'), Err(ContainerError::Full { capacity: 2 }));
///
/// assert_eq!(array.remove(0), Ok('b'));
/// assert_eq!(array.len(), 1);
/// assert!(!array.is_full());
/// ```
pub struct ElasticArray<T, G = Golden>
where
    G: GrowthStrategy,
{
    pub(crate) slots: Slots<T>,
    strategy: G,
}

impl<T> Default for ElasticArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElasticArray<T> {
    /// Creates an empty array with [`DEFAULT_BOUND`] capacity and the default [`Golden`] strategy.
    pub fn new() -> Self {
        Self::with_bound(DEFAULT_BOUND)
    }

    /// Creates an empty array with the given capacity `bound` and the default [`Golden`] strategy.
    pub fn with_bound(bound: usize) -> Self {
        Self::with_bound_using(bound, Golden)
    }

    /// Creates an array holding the given `elements` in order, with capacity equal to their count.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_slots(Slots::from_vec(elements.into_iter().collect()), Golden)
    }

    /// Creates an array from a sequence of optional elements.
    ///
    /// Fails with [`AbsentElement`] pointing at the first `None` in the sequence.
    ///
    /// [`AbsentElement`]: crate::ContainerError::AbsentElement
    pub fn try_from_optional<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Slots::try_from_optional(elements).map(|slots| Self::from_slots(slots, Golden))
    }
}

impl<T, G> ElasticArray<T, G>
where
    G: GrowthStrategy,
{
    /// Creates an empty array with [`DEFAULT_BOUND`] capacity growing by the given `strategy`.
    pub fn using(strategy: G) -> Self {
        Self::with_bound_using(DEFAULT_BOUND, strategy)
    }

    /// Creates an empty array with the given capacity `bound` growing by the given `strategy`.
    pub fn with_bound_using(bound: usize, strategy: G) -> Self {
        Self::from_slots(Slots::with_capacity(bound), strategy)
    }

    pub(crate) fn from_slots(slots: Slots<T>, strategy: G) -> Self {
        Self { slots, strategy }
    }

    /// Returns a reference to the growth strategy of the array.
    pub fn strategy(&self) -> &G {
        &self.strategy
    }

    /// Consumes the array and returns its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }

    /// Grows the capacity to the strategy's answer for `min_bound` if it is larger than the current one.
    fn grow(&mut self, min_bound: usize) {
        let capacity = self.slots.capacity();
        let new_bound = self.strategy.next_bound(capacity, min_bound);
        if new_bound > capacity {
            log::trace!("growing elastic array from {capacity} to {new_bound} positions");
            self.slots.relocate(new_bound);
        }
    }

    fn full_error(&self) -> ContainerError {
        let capacity = self.slots.capacity();
        log::debug!("insertion rejected; elastic array is full at capacity {capacity}");
        ContainerError::Full { capacity }
    }
}

impl<T, G: GrowthStrategy> Sealed for ElasticArray<T, G> {}

impl<T, G: GrowthStrategy> Array<T> for ElasticArray<T, G> {
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T, G: GrowthStrategy> Container for ElasticArray<T, G> {
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }
}

impl<T, G: GrowthStrategy> Bounded for ElasticArray<T, G> {
    fn is_full(&self) -> bool {
        let capacity = self.slots.capacity();
        self.slots.len() >= capacity
            && self.strategy.next_bound(capacity, capacity.saturating_add(1)) <= capacity
    }
}

impl<T, G: GrowthStrategy> Elastic for ElasticArray<T, G> {
    fn require_bound(&mut self, bound: usize) {
        if bound > self.slots.capacity() {
            self.grow(bound);
        }
    }
}

impl<T, G: GrowthStrategy> Indexed for ElasticArray<T, G> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T, G: GrowthStrategy> ReadableAt<T> for ElasticArray<T, G> {
    fn read<R, F>(&self, index: usize, reader: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.slots.get(index).map(reader)
    }
}

impl<T, G: GrowthStrategy> Writable<T> for ElasticArray<T, G> {
    fn put(&mut self, index: usize, element: T) -> Result<T> {
        self.slots.put(index, element)
    }
}

impl<T, G: GrowthStrategy> Swappable<T> for ElasticArray<T, G> {
    fn read2<R, F>(&self, index: usize, index2: usize, reader: F) -> Result<R>
    where
        F: FnOnce(&T, &T) -> R,
    {
        let a = self.slots.get(index)?;
        let b = self.slots.get(index2)?;
        Ok(reader(a, b))
    }

    fn swap(&mut self, index: usize, index2: usize) -> Result<()> {
        self.slots.swap(index, index2)
    }
}

impl<T, G: GrowthStrategy> InsertableAt<T> for ElasticArray<T, G> {
    fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }

        let len = self.slots.len();
        if index > len {
            return Err(ContainerError::OutOfRange { index, len });
        }

        if len + 1 > self.slots.capacity() {
            self.grow(len + 1);
            // a strategy may still refuse to provide the room
            if len + 1 > self.slots.capacity() {
                return Err(self.full_error());
            }
        }

        self.slots.insert(index, element);
        Ok(())
    }
}

impl<T, G: GrowthStrategy> RemovableAt<T> for ElasticArray<T, G> {
    fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }

        self.slots.check(index)?;
        Ok(self.slots.remove(index))
    }
}

impl<T, G: GrowthStrategy> Insertable<T> for ElasticArray<T, G> {
    fn push(&mut self, element: T) -> Result<()> {
        self.append(element)
    }
}

impl<T, G: GrowthStrategy> Removable<T> for ElasticArray<T, G> {
    fn pop(&mut self) -> Result<T> {
        match self.slots.len() {
            0 => Err(ContainerError::Empty),
            len => self.remove(len - 1),
        }
    }
}

impl<T: PartialEq, G: GrowthStrategy> Searchable<T> for ElasticArray<T, G> {
    fn find(&self, element: &T) -> Option<usize> {
        self.slots.find(element)
    }
}

impl<T: PartialEq, G: GrowthStrategy> Queryable<T> for ElasticArray<T, G> {
    fn contains(&self, element: &T) -> bool {
        self.slots.find(element).is_some()
    }
}
