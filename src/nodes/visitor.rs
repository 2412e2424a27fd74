use super::{BiLink, Fork, Link, Terminal};

/// An operation over node graphs, resolved per node variant.
///
/// A visitor is handed to [`Visitable::accept`]; the visited value calls back the
/// method of its own variant. Hence, the behavior is determined by the concrete
/// variant of the node rather than by the type through which it is reached, and
/// the visitor never inspects the node.
///
/// The set of variants is closed: links, bidirectional links, forks and the terminal.
/// The set of operations is open; a new traversal is a new visitor.
///
/// A bidirectional link is a link; unless overridden, [`visit_bilink`] visits it as its link.
///
/// ```
/// use orx_capability_col::{Fork, Link, NodeGraph, Terminal, Visitable, Visitor};
///
/// /// Counts the nodes reachable through `next`, `left` and `right`.
/// struct Count;
///
/// impl<E> Visitor<E> for Count {
///     type Output = usize;
///
///     fn visit_link(&mut self, link: &Link<E>) -> usize {
///         1 + link.next().accept(self)
///     }
///
///     fn visit_fork(&mut self, fork: &Fork<E>) -> usize {
///         1 + fork.left().accept(self) + fork.right().accept(self)
///     }
///
///     fn visit_terminal(&mut self, _: Terminal) -> usize {
///         0
///     }
/// }
///
/// let mut graph = NodeGraph::new();
/// let c = graph.push_link('c', Terminal).unwrap();
/// let b = graph.push_link('b', c).unwrap();
/// let a = graph.push_link('a', b).unwrap();
///
/// assert_eq!(graph.accept(a, &mut Count), Ok(3));
/// assert_eq!(Visitable::<char>::accept(&Terminal, &mut Count), 0);
/// ```
///
/// [`visit_bilink`]: Visitor::visit_bilink
pub trait Visitor<E> {
    /// Result of visiting a node or the terminal.
    type Output;

    /// Visits a unidirectional link.
    fn visit_link(&mut self, link: &Link<E>) -> Self::Output;

    /// Visits a bidirectional link.
    fn visit_bilink(&mut self, bilink: &BiLink<E>) -> Self::Output {
        self.visit_link(bilink.as_link())
    }

    /// Visits a binary fork.
    fn visit_fork(&mut self, fork: &Fork<E>) -> Self::Output;

    /// Visits the terminal; i.e., the absence of a node.
    fn visit_terminal(&mut self, terminal: Terminal) -> Self::Output;
}

/// A value which can be visited by a [`Visitor`].
pub trait Visitable<E> {
    /// Dispatches to the `visitor` method of the concrete variant of self, and returns its result.
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized;
}
