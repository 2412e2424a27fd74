use crate::{ElasticArray, FixedArray, GrowthStrategy};

impl<T: Clone> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: Clone, G: GrowthStrategy + Clone> Clone for ElasticArray<T, G> {
    /// Clones the elements together with the capacity and the growth strategy.
    fn clone(&self) -> Self {
        Self::from_slots(self.slots.clone(), self.strategy().clone())
    }
}
