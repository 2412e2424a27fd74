use crate::Result;

/// Base of all capability contracts: a collection of elements which might be empty.
///
/// Containers implement only the subset of the capabilities their semantics support.
/// For instance, a [`FixedArray`] is never [`Insertable`] since its size can never change.
///
/// [`FixedArray`]: crate::FixedArray
pub trait Container {
    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool;
}

/// A container which can be queried for membership of an element.
pub trait Queryable<E>: Container {
    /// Returns true if any of the held elements is equal to the given `element`.
    fn contains(&self, element: &E) -> bool;
}

/// A container whose held element can be observed through a projection,
/// without handing out the element itself.
pub trait Readable<E>: Container {
    /// Applies the `reader` to the held element and returns its result.
    fn get<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R;
}

/// A container accepting elements without a position.
pub trait Insertable<E>: Container {
    /// Adds the `element` to the container where the container sees fit.
    fn push(&mut self, element: E) -> Result<()>;
}

/// A container releasing elements without a position.
pub trait Removable<E>: Container {
    /// Removes and returns an element of the container's choosing.
    fn pop(&mut self) -> Result<E>;
}

/// A container with a bound on the number of elements it can hold.
pub trait Bounded {
    /// Returns true if the container cannot accept any more elements.
    fn is_full(&self) -> bool;
}

/// A bounded container whose bound can be raised on demand.
pub trait Elastic: Bounded {
    /// Ensures that the bound is at least `bound`, growing if necessary;
    /// does nothing if the bound is already satisfied.
    ///
    /// Growth is best-effort: the resulting bound is decided by the container's
    /// growth strategy which may refuse to grow.
    fn require_bound(&mut self, bound: usize);
}
