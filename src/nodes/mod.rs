mod bilink;
mod edge;
mod fork;
mod graph;
mod link;
mod node;
mod node_ptr;
mod relation;
mod terminal;
mod visitor;

pub use bilink::BiLink;
pub use edge::Edge;
pub use fork::Fork;
pub use graph::NodeGraph;
pub use link::Link;
pub use node::Node;
pub use node_ptr::NodePtr;
pub use relation::Relation;
pub use terminal::Terminal;
pub use visitor::{Visitable, Visitor};
