pub use crate::arrays::Array;
pub use crate::capabilities::{
    Bounded, Container, Elastic, Indexed, Insertable, InsertableAt, Queryable, Readable,
    ReadableAt, Removable, RemovableAt, Searchable, Swappable, Writable,
};
pub use crate::growth::GrowthStrategy;
pub use crate::nodes::{Visitable, Visitor};
