use super::{BiLink, Edge, Fork, Link, Node, NodePtr, Relation, Terminal, Visitable, Visitor};
use crate::{ContainerError, Result};
use orx_pinned_vec::PinnedVec;
use core::marker::PhantomData;
use orx_split_vec::SplitVec;

/// Owner of the nodes of linked lists and binary trees.
///
/// Nodes are stored in a pinned vector `P`; a node never moves and is never removed
/// until the graph is dropped. Therefore, the [`NodePtr`] handles returned on
/// creation, as well as the relations among the nodes, stay valid for the entire
/// lifetime of the graph.
///
/// Every relation is validated to lead to a node of the same graph, or to the
/// [`Terminal`]. Note that cycles are not detected; building one is allowed while
/// traversing it never terminates.
///
/// ```
/// use orx_capability_col::{NodeGraph, Readable, Terminal};
///
/// let mut graph = NodeGraph::new();
///
/// let leaf = graph.push_fork(5, Terminal, Terminal).unwrap();
/// let root = graph.push_fork(3, leaf, Terminal).unwrap();
///
/// let root = graph.node(root).unwrap();
/// assert_eq!(root.get(|x| *x), 3);
/// ```
///
/// [`Terminal`]: crate::Terminal
/// [`SplitVec`]: orx_split_vec::SplitVec
pub struct NodeGraph<E, P = SplitVec<Node<E>>>
where
    P: PinnedVec<Node<E>>,
{
    nodes: P,
    phantom: PhantomData<E>,
}

impl<E, P> Default for NodeGraph<E, P>
where
    P: PinnedVec<Node<E>> + Default,
{
    fn default() -> Self {
        Self {
            nodes: P::default(),
            phantom: PhantomData,
        }
    }
}

impl<E> NodeGraph<E> {
    /// Creates a new graph without any nodes, stored in a [`SplitVec`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, P> NodeGraph<E, P>
where
    P: PinnedVec<Node<E>>,
{
    /// Returns the number of nodes in the graph.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether or not the graph has any nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns true if the `node` handle belongs to this graph.
    #[inline(always)]
    pub fn contains(&self, node: NodePtr<E>) -> bool {
        self.nodes.contains_ptr(node.ptr())
    }

    // push

    /// Creates a link with the given `element` and `next` relation, and returns its handle.
    ///
    /// Fails with [`ForeignNode`] if `next` is a node of another graph.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    pub fn push_link(&mut self, element: E, next: impl Into<Relation<E>>) -> Result<NodePtr<E>> {
        let next = self.validate(next.into())?;
        Ok(self.push(Node::Link(Link::new(element, next))))
    }

    /// Creates a bidirectional link with the given `element`, `next` and `prev` relations,
    /// and returns its handle.
    ///
    /// Relations of the `next` and `prev` nodes are not updated.
    ///
    /// Fails with [`ForeignNode`] if `next` or `prev` is a node of another graph.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    pub fn push_bilink(
        &mut self,
        element: E,
        next: impl Into<Relation<E>>,
        prev: impl Into<Relation<E>>,
    ) -> Result<NodePtr<E>> {
        let next = self.validate(next.into())?;
        let prev = self.validate(prev.into())?;
        Ok(self.push(Node::BiLink(BiLink::new(element, next, prev))))
    }

    /// Creates a fork with the given `element`, `left` and `right` relations, and returns its handle.
    ///
    /// Fails with [`ForeignNode`] if `left` or `right` is a node of another graph.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    pub fn push_fork(
        &mut self,
        element: E,
        left: impl Into<Relation<E>>,
        right: impl Into<Relation<E>>,
    ) -> Result<NodePtr<E>> {
        let left = self.validate(left.into())?;
        let right = self.validate(right.into())?;
        Ok(self.push(Node::Fork(Fork::new(element, left, right))))
    }

    // get

    /// Returns a reference to the node with the given handle.
    ///
    /// Fails with [`ForeignNode`] if the handle does not belong to this graph.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    pub fn node(&self, node: NodePtr<E>) -> Result<&Node<E>> {
        match self.contains(node) {
            // SAFETY: the node lives in the pinned storage of self
            true => Ok(unsafe { &*node.ptr() }),
            false => Err(ContainerError::ForeignNode),
        }
    }

    /// Resolves the `relation` into an edge which can be visited.
    ///
    /// Fails with [`ForeignNode`] if the relation leads to a node of another graph.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    pub fn edge(&self, relation: impl Into<Relation<E>>) -> Result<Edge<'_, E>> {
        match relation.into() {
            Relation::Node(x) => self.node(x).map(Edge::Node),
            Relation::Terminal => Ok(Edge::Terminal(Terminal)),
        }
    }

    /// Hands the `visitor` to the node with the given handle and returns the result of the visit.
    pub fn accept<V>(&self, node: NodePtr<E>, visitor: &mut V) -> Result<V::Output>
    where
        V: Visitor<E> + ?Sized,
    {
        self.node(node).map(|x| x.accept(visitor))
    }

    // mut

    /// Sets the `next` relation of the `node` to `target`, and returns the prior relation.
    ///
    /// Only the given relation changes; in particular, `prev` of the target is left as is.
    ///
    /// Fails with [`ForeignNode`] if either `node` or `target` is not of this graph;
    /// and with [`MissingRelation`] if the node is a fork.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    /// [`MissingRelation`]: crate::ContainerError::MissingRelation
    pub fn set_next(
        &mut self,
        node: NodePtr<E>,
        target: impl Into<Relation<E>>,
    ) -> Result<Relation<E>> {
        let target = self.validate(target.into())?;
        log::trace!("setting next of {node:?} to {target:?}");
        self.node_mut(node)?.set_next(target)
    }

    /// Sets the `prev` relation of the `node` to `target`, and returns the prior relation.
    ///
    /// Only the given relation changes; in particular, `next` of the target is left as is.
    ///
    /// Fails with [`ForeignNode`] if either `node` or `target` is not of this graph;
    /// and with [`MissingRelation`] if the node is not a bidirectional link.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    /// [`MissingRelation`]: crate::ContainerError::MissingRelation
    pub fn set_prev(
        &mut self,
        node: NodePtr<E>,
        target: impl Into<Relation<E>>,
    ) -> Result<Relation<E>> {
        let target = self.validate(target.into())?;
        log::trace!("setting prev of {node:?} to {target:?}");
        self.node_mut(node)?.set_prev(target)
    }

    /// Sets the `left` relation of the `node` to `target`, and returns the prior relation.
    ///
    /// Fails with [`ForeignNode`] if either `node` or `target` is not of this graph;
    /// and with [`MissingRelation`] if the node is not a fork.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    /// [`MissingRelation`]: crate::ContainerError::MissingRelation
    pub fn set_left(
        &mut self,
        node: NodePtr<E>,
        target: impl Into<Relation<E>>,
    ) -> Result<Relation<E>> {
        let target = self.validate(target.into())?;
        log::trace!("setting left of {node:?} to {target:?}");
        self.node_mut(node)?.set_left(target)
    }

    /// Sets the `right` relation of the `node` to `target`, and returns the prior relation.
    ///
    /// Fails with [`ForeignNode`] if either `node` or `target` is not of this graph;
    /// and with [`MissingRelation`] if the node is not a fork.
    ///
    /// [`ForeignNode`]: crate::ContainerError::ForeignNode
    /// [`MissingRelation`]: crate::ContainerError::MissingRelation
    pub fn set_right(
        &mut self,
        node: NodePtr<E>,
        target: impl Into<Relation<E>>,
    ) -> Result<Relation<E>> {
        let target = self.validate(target.into())?;
        log::trace!("setting right of {node:?} to {target:?}");
        self.node_mut(node)?.set_right(target)
    }

    // helpers

    fn push(&mut self, node: Node<E>) -> NodePtr<E> {
        let ptr = self.nodes.push_get_ptr(node);
        NodePtr::new(ptr as *const Node<E>)
    }

    fn validate(&self, relation: Relation<E>) -> Result<Relation<E>> {
        match relation {
            Relation::Node(x) if !self.contains(x) => Err(ContainerError::ForeignNode),
            _ => Ok(relation),
        }
    }

    fn node_mut(&mut self, node: NodePtr<E>) -> Result<&mut Node<E>> {
        match self.contains(node) {
            // SAFETY: the node lives in the pinned storage of self, which is mutably borrowed
            true => Ok(unsafe { &mut *node.ptr_mut() }),
            false => Err(ContainerError::ForeignNode),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn graph_over_explicit_storage() {
        let mut graph = NodeGraph::<u8, SplitVec<Node<u8>>>::default();
        assert!(graph.is_empty());

        let leaf = graph.push_fork(2, Terminal, Terminal).unwrap();
        let root = graph.push_fork(1, Terminal, leaf).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node(root).unwrap().read(|x| *x), 1);
        assert_eq!(graph.set_right(root, Terminal), Ok(Relation::Node(leaf)));
    }

    #[test]
    fn foreign_nodes_are_rejected() {
        let mut graph = NodeGraph::new();
        let mut other = NodeGraph::new();

        let mine = graph.push_link(1, Terminal).unwrap();
        let theirs = other.push_link(2, Terminal).unwrap();

        assert!(graph.contains(mine));
        assert!(!graph.contains(theirs));

        assert_eq!(
            graph.push_link(3, theirs).err(),
            Some(ContainerError::ForeignNode)
        );
        assert_eq!(graph.set_next(mine, theirs), Err(ContainerError::ForeignNode));
        assert_eq!(graph.set_next(theirs, mine), Err(ContainerError::ForeignNode));
        assert!(graph.node(theirs).is_err());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn missing_relations_are_rejected() {
        let mut graph = NodeGraph::new();
        let link = graph.push_link('a', Terminal).unwrap();
        let fork = graph.push_fork('b', Terminal, Terminal).unwrap();

        assert_eq!(
            graph.set_left(link, fork),
            Err(ContainerError::MissingRelation {
                relation: "left",
                variant: "link"
            })
        );
        assert_eq!(
            graph.set_next(fork, link),
            Err(ContainerError::MissingRelation {
                relation: "next",
                variant: "fork"
            })
        );
        assert_eq!(
            graph.set_prev(link, fork),
            Err(ContainerError::MissingRelation {
                relation: "prev",
                variant: "link"
            })
        );
    }

    #[test]
    fn set_returns_prior_relation() {
        let mut graph = NodeGraph::new();
        let a = graph.push_link(0, Terminal).unwrap();
        let b = graph.push_link(1, Terminal).unwrap();

        assert_eq!(graph.set_next(a, b), Ok(Relation::Terminal));
        assert_eq!(graph.set_next(a, Terminal), Ok(Relation::Node(b)));
        assert!(graph.node(a).unwrap().read(|x| *x == 0));
    }

    #[test]
    fn handles_survive_storage_growth() {
        let mut graph = NodeGraph::new();
        let first = graph.push_link(0usize, Terminal).unwrap();
        let mut last = first;
        for i in 1..1000 {
            let node = graph.push_link(i, Terminal).unwrap();
            graph.set_next(last, node).unwrap();
            last = node;
        }

        assert_eq!(graph.node(first).unwrap().read(|x| *x), 0);
        assert_eq!(graph.node(last).unwrap().read(|x| *x), 999);
    }
}
