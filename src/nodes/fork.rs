use super::{Edge, Relation, Visitable, Visitor};

/// Node of a binary tree; owns an element and relations to the `left` and `right` nodes.
pub struct Fork<E> {
    element: E,
    left: Relation<E>,
    right: Relation<E>,
}

impl<E> Fork<E> {
    pub(crate) fn new(element: E, left: Relation<E>, right: Relation<E>) -> Self {
        Self {
            element,
            left,
            right,
        }
    }

    /// Applies the `reader` to the element of the fork and returns its result.
    pub fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R,
    {
        reader(&self.element)
    }

    /// Returns the edge to the left node; the terminal if there is none.
    pub fn left(&self) -> Edge<'_, E> {
        // SAFETY: forks only live in a node graph which validated the target
        unsafe { self.left.resolve() }
    }

    /// Returns the edge to the right node; the terminal if there is none.
    pub fn right(&self) -> Edge<'_, E> {
        // SAFETY: forks only live in a node graph which validated the target
        unsafe { self.right.resolve() }
    }

    /// Returns the stored relation to the left node.
    pub fn left_relation(&self) -> Relation<E> {
        self.left
    }

    /// Returns the stored relation to the right node.
    pub fn right_relation(&self) -> Relation<E> {
        self.right
    }

    #[inline(always)]
    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    pub(crate) fn set_left(&mut self, left: Relation<E>) -> Relation<E> {
        core::mem::replace(&mut self.left, left)
    }

    pub(crate) fn set_right(&mut self, right: Relation<E>) -> Relation<E> {
        core::mem::replace(&mut self.right, right)
    }
}

impl<E> Visitable<E> for Fork<E> {
    #[inline(always)]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        visitor.visit_fork(self)
    }
}
