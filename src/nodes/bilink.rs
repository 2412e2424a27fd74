use super::{Edge, Link, Relation, Visitable, Visitor};

/// Node of a bidirectional list; a [`Link`] which additionally owns a relation
/// to the `prev` node.
///
/// The `prev` and `next` relations are independent. Setting one never updates
/// the other, nor the relations of the related nodes; keeping a consistent
/// doubly linked list is the responsibility of the caller.
pub struct BiLink<E> {
    link: Link<E>,
    prev: Relation<E>,
}

impl<E> BiLink<E> {
    pub(crate) fn new(element: E, next: Relation<E>, prev: Relation<E>) -> Self {
        Self {
            link: Link::new(element, next),
            prev,
        }
    }

    /// Returns the bidirectional link as a link.
    pub fn as_link(&self) -> &Link<E> {
        &self.link
    }

    /// Applies the `reader` to the element of the link and returns its result.
    pub fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R,
    {
        self.link.read(reader)
    }

    /// Returns the edge to the next node; the terminal if there is none.
    pub fn next(&self) -> Edge<'_, E> {
        self.link.next()
    }

    /// Returns the edge to the previous node; the terminal if there is none.
    pub fn prev(&self) -> Edge<'_, E> {
        // SAFETY: links only live in a node graph which validated the target
        unsafe { self.prev.resolve() }
    }

    /// Returns the stored relation to the previous node.
    pub fn prev_relation(&self) -> Relation<E> {
        self.prev
    }

    pub(crate) fn link_mut(&mut self) -> &mut Link<E> {
        &mut self.link
    }

    pub(crate) fn set_prev(&mut self, prev: Relation<E>) -> Relation<E> {
        core::mem::replace(&mut self.prev, prev)
    }
}

impl<E> Visitable<E> for BiLink<E> {
    #[inline(always)]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        visitor.visit_bilink(self)
    }
}
