use super::Node;
use core::fmt::Debug;

/// A handle to a node of a [`NodeGraph`].
///
/// The handle is a plain copyable address of the node within the pinned storage
/// of the graph that created it. It can only be dereferenced through the graph,
/// which validates that the handle belongs to it.
///
/// [`NodeGraph`]: crate::NodeGraph
pub struct NodePtr<E> {
    ptr: *mut Node<E>,
}

// Only the pointer is copied, so "E" does not need to be copy itself.
impl<E> Copy for NodePtr<E> {}

impl<E> Clone for NodePtr<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> PartialEq for NodePtr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<E> Eq for NodePtr<E> {}

impl<E> core::hash::Hash for NodePtr<E> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<E> Debug for NodePtr<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr")
            .field("ptr", &(self.ptr as usize))
            .finish()
    }
}

impl<E> NodePtr<E> {
    #[inline(always)]
    pub(crate) fn new(ptr: *const Node<E>) -> Self {
        Self {
            ptr: ptr as *mut Node<E>,
        }
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *const Node<E> {
        self.ptr
    }

    #[inline(always)]
    pub(crate) fn ptr_mut(&self) -> *mut Node<E> {
        self.ptr
    }
}
