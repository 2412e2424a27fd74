use thiserror::Error;

/// Result of fallible container and node graph operations.
pub type Result<T, E = ContainerError> = core::result::Result<T, E>;

/// Error cases of container and node graph operations.
///
/// All errors are raised before any mutation; hence, a failed operation leaves
/// the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// OutOfRange => Index is outside of the addressable logical range `[0, len)`
    /// of the container; or `[0, len]` for positional insertion.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Logical length the index is checked against.
        len: usize,
    },
    /// AbsentElement => A missing element was provided where one is required,
    /// such as a `None` within the sequence a container is created from.
    #[error("absent element at position {position}")]
    AbsentElement {
        /// Position of the first absent element in the input.
        position: usize,
    },
    /// Full => Insertion is attempted on a container whose growth strategy
    /// cannot provide room for one more element.
    #[error("container is full at capacity {capacity}")]
    Full {
        /// Capacity at the time of the rejected insertion.
        capacity: usize,
    },
    /// Empty => Removal is attempted on a container with no elements.
    #[error("container is empty")]
    Empty,
    /// ForeignNode => Node handle or relation target does not belong to the node graph.
    #[error("node does not belong to this graph")]
    ForeignNode,
    /// MissingRelation => The node variant does not own the requested relation;
    /// such as, the `left` relation of a link.
    #[error("a {variant} node has no `{relation}` relation")]
    MissingRelation {
        /// Name of the requested relation.
        relation: &'static str,
        /// Name of the variant of the node.
        variant: &'static str,
    },
}
