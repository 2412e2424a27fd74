use super::{Edge, Relation, Visitable, Visitor};

/// Node of a unidirectional list; owns an element and a relation to the `next` node.
pub struct Link<E> {
    element: E,
    next: Relation<E>,
}

impl<E> Link<E> {
    pub(crate) fn new(element: E, next: Relation<E>) -> Self {
        Self { element, next }
    }

    /// Applies the `reader` to the element of the link and returns its result.
    pub fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R,
    {
        reader(&self.element)
    }

    /// Returns the edge to the next node; the terminal if there is none.
    pub fn next(&self) -> Edge<'_, E> {
        // SAFETY: links only live in a node graph which validated the target
        unsafe { self.next.resolve() }
    }

    /// Returns the stored relation to the next node.
    pub fn next_relation(&self) -> Relation<E> {
        self.next
    }

    #[inline(always)]
    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    pub(crate) fn set_next(&mut self, next: Relation<E>) -> Relation<E> {
        core::mem::replace(&mut self.next, next)
    }
}

impl<E> Visitable<E> for Link<E> {
    #[inline(always)]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        visitor.visit_link(self)
    }
}
