use super::{Edge, NodePtr, Terminal};
use core::fmt::Debug;

/// Stored relation of a node to another node of the same graph, or to the [`Terminal`].
///
/// A relation is never unset; its default is the terminal.
pub enum Relation<E> {
    /// Relation to a node of the graph.
    Node(NodePtr<E>),
    /// Relation to nothing.
    Terminal,
}

impl<E> Copy for Relation<E> {}

impl<E> Clone for Relation<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> PartialEq for Relation<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Terminal, Self::Terminal) => true,
            _ => false,
        }
    }
}

impl<E> Eq for Relation<E> {}

impl<E> Debug for Relation<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Node(x) => f.debug_tuple("Node").field(x).finish(),
            Self::Terminal => f.write_str("Terminal"),
        }
    }
}

impl<E> Default for Relation<E> {
    fn default() -> Self {
        Self::Terminal
    }
}

impl<E> From<NodePtr<E>> for Relation<E> {
    fn from(value: NodePtr<E>) -> Self {
        Self::Node(value)
    }
}

impl<E> From<Terminal> for Relation<E> {
    fn from(_: Terminal) -> Self {
        Self::Terminal
    }
}

impl<E> Relation<E> {
    /// Returns true if the relation leads to the terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// Returns the handle of the related node; None if the relation is terminal.
    pub fn node_ptr(&self) -> Option<NodePtr<E>> {
        match self {
            Self::Node(x) => Some(*x),
            Self::Terminal => None,
        }
    }

    /// Resolves the relation into an edge.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the related node, if any, is alive for `'a`.
    /// This holds for relations stored in nodes of a `NodeGraph` as long as the
    /// graph is borrowed for `'a`, since the graph validates every target on
    /// linking, stores nodes in pinned memory and never removes them.
    #[inline(always)]
    pub(crate) unsafe fn resolve<'a>(&self) -> Edge<'a, E> {
        match self {
            Self::Node(x) => Edge::Node(unsafe { &*x.ptr() }),
            Self::Terminal => Edge::Terminal(Terminal),
        }
    }
}
