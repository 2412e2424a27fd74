#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Capability traits, to be glob-imported: `use orx_capability_col::prelude::*;`.
pub mod prelude;

mod arrays;
mod capabilities;
mod common_traits;
mod error;
mod growth;
mod nodes;

pub use arrays::{Array, DEFAULT_BOUND, ElasticArray, FixedArray};
pub use capabilities::{
    Bounded, Container, Elastic, Indexed, Insertable, InsertableAt, Queryable, Readable,
    ReadableAt, Removable, RemovableAt, Searchable, Swappable, Writable,
};
pub use error::{ContainerError, Result};
pub use growth::{Doubling, Exact, Geometric, Golden, GrowthStrategy, Linear, NoGrowth};
pub use nodes::{BiLink, Edge, Fork, Link, Node, NodeGraph, NodePtr, Relation, Terminal};
pub use nodes::{Visitable, Visitor};
