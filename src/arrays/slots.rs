use crate::{ContainerError, Result};
use alloc::vec::Vec;
use orx_fixed_vec::FixedVec;
use orx_pinned_vec::PinnedVec;

/// Contiguous backing store shared by the arrays.
///
/// Elements occupy positions `0..len`; positions `len..capacity` are allocated
/// but hold nothing. All index-taking methods check against `len`.
///
/// The bound is kept alongside the store since the allocation of a zero-sized
/// `T` reports an unbounded capacity.
pub(crate) struct Slots<T> {
    store: FixedVec<T>,
    capacity: usize,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: FixedVec::new(capacity),
            capacity,
        }
    }

    /// Creates the slots with capacity equal to the number of `elements`.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut slots = Self::with_capacity(elements.len());
        for element in elements {
            slots.store.push(element);
        }
        slots
    }

    /// Collects the elements of `optional`, failing on the first `None`.
    pub fn try_from_optional<I>(optional: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let elements = optional
            .into_iter()
            .enumerate()
            .map(|(position, x)| x.ok_or(ContainerError::AbsentElement { position }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_vec(elements))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn check(&self, index: usize) -> Result<()> {
        match index < self.len() {
            true => Ok(()),
            false => Err(ContainerError::OutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.iter()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.store.get(index).ok_or(ContainerError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn put(&mut self, index: usize, element: T) -> Result<T> {
        let len = self.len();
        let slot = self
            .store
            .get_mut(index)
            .ok_or(ContainerError::OutOfRange { index, len })?;
        Ok(core::mem::replace(slot, element))
    }

    pub fn swap(&mut self, index: usize, index2: usize) -> Result<()> {
        self.check(index)?;
        self.check(index2)?;
        self.store.swap(index, index2);
        Ok(())
    }

    pub fn find(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store.iter().position(|x| x == element)
    }

    /// Inserts at `index <= len` shifting the tail right; the caller guarantees `len < capacity`.
    pub fn insert(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len() && self.len() < self.capacity());
        self.store.insert(index, element);
    }

    /// Removes at `index < len` shifting the tail left; the vacated last position holds nothing afterwards.
    pub fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.len());
        self.store.remove(index)
    }

    /// Moves the elements into a new store with the given `capacity`.
    ///
    /// Any address into the prior store is invalidated.
    pub fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len());
        let elements = core::mem::replace(self, Self::with_capacity(capacity)).into_vec();
        for element in elements {
            self.store.push(element);
        }
    }

    pub fn into_vec(mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        while let Some(element) = self.store.pop() {
            elements.push(element);
        }
        elements.reverse();
        elements
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut slots = Self::with_capacity(self.capacity);
        for element in self.store.iter() {
            slots.store.push(element.clone());
        }
        slots
    }
}
