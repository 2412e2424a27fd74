use super::{Node, Terminal, Visitable, Visitor};

/// A resolved relation slot: either a node of the graph or the [`Terminal`].
///
/// Every edge can be visited; hence, traversals never need a separate check for absence.
pub enum Edge<'a, E> {
    /// Edge leading to a node.
    Node(&'a Node<E>),
    /// Edge leading to nothing.
    Terminal(Terminal),
}

impl<E> Copy for Edge<'_, E> {}

impl<E> Clone for Edge<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Edge<'a, E> {
    /// Returns the node the edge leads to; None if it leads to the terminal.
    pub fn node(&self) -> Option<&'a Node<E>> {
        match *self {
            Self::Node(x) => Some(x),
            Self::Terminal(_) => None,
        }
    }

    /// Returns true if the edge leads to the terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}

impl<E> Visitable<E> for Edge<'_, E> {
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        match *self {
            Self::Node(x) => x.accept(visitor),
            Self::Terminal(x) => visitor.visit_terminal(x),
        }
    }
}
