use super::{Visitable, Visitor};

/// The "no node" value.
///
/// Terminal occupies every relation slot, `next`, `prev`, `left` or `right`,
/// which does not lead to an actual node. It is a single zero-sized value
/// shared by node graphs of all element types. It holds no element and answers
/// a visitor only with its terminal case.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Terminal;

impl<E> Visitable<E> for Terminal {
    #[inline(always)]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor<E> + ?Sized,
    {
        visitor.visit_terminal(*self)
    }
}
