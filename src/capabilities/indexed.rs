use super::container::Container;
use crate::Result;

/// A container whose elements are addressed by positions `0..len`.
pub trait Indexed: Container {
    /// Number of addressable elements.
    fn len(&self) -> usize;
}

/// An indexed container which can locate elements.
pub trait Searchable<E>: Indexed {
    /// Returns the position of the first element equal to `element`; None if there is none.
    fn find(&self, element: &E) -> Option<usize>;
}

/// An indexed container whose elements can be observed through projections.
pub trait ReadableAt<E>: Indexed {
    /// Applies the `reader` to the element at the given `index` and returns its result.
    ///
    /// Fails with [`OutOfRange`] if `index` is not less than `len`.
    ///
    /// [`OutOfRange`]: crate::ContainerError::OutOfRange
    fn read<R, F>(&self, index: usize, reader: F) -> Result<R>
    where
        F: FnOnce(&E) -> R;
}

/// An indexed container accepting elements at given positions.
pub trait InsertableAt<E>: Indexed {
    /// Inserts the `element` at the given `index`, shifting the elements at
    /// positions `index..len` one position to the right.
    fn insert(&mut self, index: usize, element: E) -> Result<()>;

    /// Inserts the `element` after the last element; i.e., at position `len`.
    fn append(&mut self, element: E) -> Result<()> {
        self.insert(self.len(), element)
    }
}

/// An indexed container releasing elements at given positions.
pub trait RemovableAt<E>: Indexed {
    /// Removes and returns the element at the given `index`, shifting the elements
    /// after it one position to the left.
    fn remove(&mut self, index: usize) -> Result<E>;
}

/// An indexed container whose elements can be replaced.
pub trait Writable<E>: Indexed {
    /// Replaces the element at the given `index` with `element` and returns the previous one.
    fn put(&mut self, index: usize, element: E) -> Result<E>;
}

/// An indexed container whose elements can be exchanged pairwise.
pub trait Swappable<E>: Indexed {
    /// Applies the `reader` to the elements at `index` and `index2` and returns its result.
    fn read2<R, F>(&self, index: usize, index2: usize, reader: F) -> Result<R>
    where
        F: FnOnce(&E, &E) -> R;

    /// Exchanges the elements at positions `index` and `index2`.
    fn swap(&mut self, index: usize, index2: usize) -> Result<()>;
}
