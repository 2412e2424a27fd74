mod array;
mod elastic_array;
mod fixed_array;
mod slots;

pub use array::Array;
pub use elastic_array::{DEFAULT_BOUND, ElasticArray};
pub use fixed_array::FixedArray;
pub(crate) use slots::Slots;
