use crate::{ElasticArray, FixedArray, Golden};
use alloc::vec::Vec;

impl<T> From<FixedArray<T>> for ElasticArray<T> {
    /// Converts the fixed array into an elastic array of the same size and capacity,
    /// growing with the default strategy.
    fn from(value: FixedArray<T>) -> Self {
        Self::from_slots(value.slots, Golden)
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(value: Vec<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Vec<T>> for ElasticArray<T> {
    fn from(value: Vec<T>) -> Self {
        Self::of(value)
    }
}
