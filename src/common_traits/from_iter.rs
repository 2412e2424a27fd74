use crate::{ElasticArray, FixedArray};

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> FromIterator<T> for ElasticArray<T> {
    /// Collects the elements into an array whose capacity equals the number of elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{Array, ElasticArray, FixedArray};

    #[test]
    fn from_iter() {
        let fixed: FixedArray<_> = (0..6).map(|x| x * 10).collect();
        assert_eq!(fixed.len(), 6);
        assert_eq!(fixed.read(5, |x| *x), Ok(50));

        let elastic: ElasticArray<_> = "abc".chars().collect();
        assert_eq!(elastic.len(), 3);
        assert_eq!(elastic.capacity(), 3);
        assert_eq!(elastic.find(&'c'), Some(2));
    }
}
