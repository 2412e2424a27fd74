use crate::{
    ElasticArray, FixedArray, GrowthStrategy, arrays::Slots, nodes::{BiLink, Fork, Link, Node},
};
use core::fmt::Debug;

struct Elements<'a, T>(&'a Slots<T>);

impl<T: Debug> Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Debug for FixedArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &self.slots.len())
            .field("elements", &Elements(&self.slots))
            .finish()
    }
}

impl<T: Debug, G: GrowthStrategy> Debug for ElasticArray<T, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElasticArray")
            .field("len", &self.slots.len())
            .field("capacity", &self.slots.capacity())
            .field("elements", &Elements(&self.slots))
            .finish()
    }
}

impl<E: Debug> Debug for Link<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Link")
            .field("element", self.element())
            .field("next", &self.next_relation())
            .finish()
    }
}

impl<E: Debug> Debug for BiLink<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BiLink")
            .field("element", self.as_link().element())
            .field("next", &self.as_link().next_relation())
            .field("prev", &self.prev_relation())
            .finish()
    }
}

impl<E: Debug> Debug for Fork<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fork")
            .field("element", self.element())
            .field("left", &self.left_relation())
            .field("right", &self.right_relation())
            .finish()
    }
}

impl<E: Debug> Debug for Node<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Link(x) => x.fmt(f),
            Node::BiLink(x) => x.fmt(f),
            Node::Fork(x) => x.fmt(f),
        }
    }
}
