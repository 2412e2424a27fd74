use super::{BiLink, Fork, Link, Relation, Visitable, Visitor};
use crate::{Container, ContainerError, Queryable, Readable, Result};

/// A node of a [`NodeGraph`] owning exactly one element.
///
/// The variants are closed; visiting a node dispatches to the [`Visitor`] method
/// of its variant.
///
/// [`NodeGraph`]: crate::NodeGraph
pub enum Node<E> {
    /// Unidirectional list node.
    Link(Link<E>),
    /// Bidirectional list node.
    BiLink(BiLink<E>),
    /// Binary tree node.
    Fork(Fork<E>),
}

impl<E> Node<E> {
    /// Applies the `reader` to the element of the node and returns its result.
    pub fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R,
    {
        reader(self.element())
    }

    /// Name of the variant of the node.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Link(_) => "link",
            Self::BiLink(_) => "bilink",
            Self::Fork(_) => "fork",
        }
    }

    fn element(&self) -> &E {
        match self {
            Self::Link(x) => x.element(),
            Self::BiLink(x) => x.as_link().element(),
            Self::Fork(x) => x.element(),
        }
    }

    fn missing(&self, relation: &'static str) -> ContainerError {
        ContainerError::MissingRelation {
            relation,
            variant: self.variant_name(),
        }
    }

    pub(crate) fn set_next(&mut self, next: Relation<E>) -> Result<Relation<E>> {
        let missing = self.missing("next");
        match self {
            Self::Link(x) => Ok(x.set_next(next)),
            Self::BiLink(x) => Ok(x.link_mut().set_next(next)),
            Self::Fork(_) => Err(missing),
        }
    }

    pub(crate) fn set_prev(&mut self, prev: Relation<E>) -> Result<Relation<E>> {
        let missing = self.missing("prev");
        match self {
            Self::BiLink(x) => Ok(x.set_prev(prev)),
            Self::Link(_) | Self::Fork(_) => Err(missing),
        }
    }

    pub(crate) fn set_left(&mut self, left: Relation<E>) -> Result<Relation<E>> {
        let missing = self.missing("left");
        match self {
            Self::Fork(x) => Ok(x.set_left(left)),
            Self::Link(_) | Self::BiLink(_) => Err(missing),
        }
    }

    pub(crate) fn set_right(&mut self, right: Relation<E>) -> Result<Relation<E>> {
        let missing = self.missing("right");
        match self {
            Self::Fork(x) => Ok(x.set_right(right)),
            Self::Link(_) | Self::BiLink(_) => Err(missing),
        }
    }
}

impl<E> Visitable<E> for Node<E> {
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        match self {
            Self::Link(x) => x.accept(visitor),
            Self::BiLink(x) => x.accept(visitor),
            Self::Fork(x) => x.accept(visitor),
        }
    }
}

impl<E> Container for Node<E> {
    /// A node always holds its element.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        false
    }
}

impl<E> Readable<E> for Node<E> {
    fn get<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&E) -> R,
    {
        self.read(reader)
    }
}

impl<E: PartialEq> Queryable<E> for Node<E> {
    fn contains(&self, element: &E) -> bool {
        self.element() == element
    }
}
