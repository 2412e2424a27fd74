use super::{Array, Slots, array::sealed::Sealed};
use crate::{
    Bounded, Container, Indexed, Queryable, ReadableAt, Result, Searchable, Swappable, Writable,
};
use alloc::vec::Vec;
use orx_pseudo_default::PseudoDefault;

/// Contiguous storage of a fixed number of elements.
///
/// Size of the array is its capacity; it can never change.
/// Therefore, a fixed array is always full and it is neither insertable nor removable.
/// Elements can be read, replaced and swapped by their positions.
///
/// ```
/// use orx_capability_col::prelude::*;
/// use orx_capability_col::{ContainerError, FixedArray};
///
/// let mut array = FixedArray::of([3, 1, 2]);
/// assert_eq!(array.len(), 3);
/// assert!(array.is_full());
///
/// assert_eq!(array.put(1, 7), Ok(1));
/// array.swap(0, 2).unwrap();
/// assert_eq!(array.read2(0, 1, |a, b| a + b), Ok(9));
///
/// assert_eq!(array.put(3, 0), Err(ContainerError::OutOfRange { index: 3, len: 3 }));
/// ```
pub struct FixedArray<T> {
    pub(crate) slots: Slots<T>,
}

impl<T> FixedArray<T> {
    /// Creates an array holding the given `elements` in order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            slots: Slots::from_vec(elements.into_iter().collect()),
        }
    }

    /// Creates an array of `len` elements each of which is the pseudo-default value of `T`.
    pub fn with_len(len: usize) -> Self
    where
        T: PseudoDefault,
    {
        Self::of((0..len).map(|_| T::pseudo_default()))
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
        Slots::try_from_optional(elements).map(|slots| Self { slots })
    }

    /// Consumes the array and returns its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T> Sealed for FixedArray<T> {}

impl<T> Array<T> for FixedArray<T> {
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Container for FixedArray<T> {
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }
}

impl<T> Bounded for FixedArray<T> {
    #[inline(always)]
    fn is_full(&self) -> bool {
        true
    }
}

impl<T> Indexed for FixedArray<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> ReadableAt<T> for FixedArray<T> {
    fn read<R, F>(&self, index: usize, reader: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.slots.get(index).map(reader)
    }
}

impl<T> Writable<T> for FixedArray<T> {
    fn put(&mut self, index: usize, element: T) -> Result<T> {
        self.slots.put(index, element)
    }
}

impl<T> Swappable<T> for FixedArray<T> {
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

impl<T: PartialEq> Searchable<T> for FixedArray<T> {
    fn find(&self, element: &T) -> Option<usize> {
        self.slots.find(element)
    }
}

impl<T: PartialEq> Queryable<T> for FixedArray<T> {
    fn contains(&self, element: &T) -> bool {
        self.slots.find(element).is_some()
    }
}
