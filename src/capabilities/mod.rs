mod container;
mod indexed;

pub use container::{Bounded, Container, Elastic, Insertable, Queryable, Readable, Removable};
pub use indexed::{
    Indexed, InsertableAt, ReadableAt, RemovableAt, Searchable, Swappable, Writable,
};
