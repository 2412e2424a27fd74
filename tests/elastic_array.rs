use orx_capability_col::prelude::*;
use orx_capability_col::{
    ContainerError, DEFAULT_BOUND, Doubling, ElasticArray, Exact, Golden, Linear, NoGrowth,
};
use test_case::test_case;

fn to_vec<T: Clone, G: GrowthStrategy>(array: &ElasticArray<T, G>) -> Vec<T> {
    (0..array.len())
        .map(|i| array.read(i, |x| x.clone()).unwrap())
        .collect()
}

fn filled<G: GrowthStrategy>(strategy: G, len: usize) -> ElasticArray<usize, G> {
    let mut array = ElasticArray::using(strategy);
    for i in 0..len {
        array.append(i).unwrap();
    }
    array
}

#[test]
fn new_array() {
    let array: ElasticArray<String> = ElasticArray::new();

    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), DEFAULT_BOUND);
    assert!(!array.is_full());
    assert_eq!(array.strategy(), &Golden);
}

#[test]
fn with_bound_zero() {
    let mut array = ElasticArray::with_bound(0);
    assert_eq!(array.capacity(), 0);

    array.append('x').unwrap();
    assert_eq!(array.capacity(), 1);
    assert_eq!(to_vec(&array), vec!['x']);
}

#[test]
fn doubling_scenario() {
    let mut array = ElasticArray::using(Doubling);
    for i in 0..1000 {
        array.append(i).unwrap();
    }
    assert_eq!(array.len(), 1000);
    assert_eq!(array.capacity(), 1280);

    for i in 0..9000 {
        array.append(i).unwrap();
    }
    assert_eq!(array.len(), 10000);
    assert_eq!(array.capacity(), 10240);
    assert_eq!(array.read(9999, |x| *x), Ok(8999));
}

#[test]
fn no_growth_scenario() {
    let mut array = ElasticArray::using(NoGrowth);
    for i in 0..10 {
        assert!(!array.is_full());
        array.append(i).unwrap();
    }

    assert!(array.is_full());
    assert_eq!(array.append(10), Err(ContainerError::Full { capacity: 10 }));
    assert_eq!(array.insert(0, 10), Err(ContainerError::Full { capacity: 10 }));
    assert_eq!(to_vec(&array), (0..10).collect::<Vec<_>>());
}

#[test_case(Doubling)]
#[test_case(Golden)]
#[test_case(Exact)]
#[test_case(Linear::new(3))]
fn growing_array_is_never_full<G: GrowthStrategy>(strategy: G) {
    let array = filled(strategy, 100);
    assert_eq!(array.len(), 100);
    assert!(array.capacity() >= 100);
    assert!(!array.is_full());
}

#[test]
fn exact_growth_tracks_len() {
    let mut array = filled(Exact, DEFAULT_BOUND);
    assert_eq!(array.capacity(), DEFAULT_BOUND);

    for len in DEFAULT_BOUND + 1..30 {
        array.append(len - 1).unwrap();
        assert_eq!(array.capacity(), len);
    }
}

#[test_case(0)]
#[test_case(1)]
#[test_case(4)]
#[test_case(9)]
#[test_case(10)]
fn insert_then_remove_restores(index: usize) {
    let mut array = filled(Golden, 10);
    let before = to_vec(&array);

    array.insert(index, 42).unwrap();
    assert_eq!(array.len(), 11);
    assert_eq!(array.read(index, |x| *x), Ok(42));

    assert_eq!(array.remove(index), Ok(42));
    assert_eq!(to_vec(&array), before);
}

#[test]
fn insert_shifts_right() {
    let mut array = ElasticArray::of(['a', 'b', 'c', 'd']);
    array.insert(1, 'x').unwrap();
    assert_eq!(to_vec(&array), vec!['a', 'x', 'b', 'c', 'd']);

    array.insert(5, 'y').unwrap();
    assert_eq!(to_vec(&array), vec!['a', 'x', 'b', 'c', 'd', 'y']);
}

#[test]
fn remove_shifts_left() {
    let mut array = ElasticArray::of(['a', 'b', 'c', 'd']);
    assert_eq!(array.remove(1), Ok('b'));
    assert_eq!(to_vec(&array), vec!['a', 'c', 'd']);
    assert_eq!(array.remove(2), Ok('d'));
    assert_eq!(to_vec(&array), vec!['a', 'c']);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn append_then_read_last() {
    let mut array = ElasticArray::with_bound_using(1, Linear::new(2));
    for i in 0..25 {
        array.append(i * i).unwrap();
        assert_eq!(array.read(array.len() - 1, |x| *x), Ok(i * i));
    }
}

#[test]
fn out_of_range() {
    let mut array = filled(Doubling, 3);

    assert_eq!(
        array.insert(4, 0),
        Err(ContainerError::OutOfRange { index: 4, len: 3 })
    );
    assert_eq!(
        array.remove(3),
        Err(ContainerError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        array.put(3, 0),
        Err(ContainerError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        array.swap(0, 3),
        Err(ContainerError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        array.read2(5, 0, |a, b| a + b),
        Err(ContainerError::OutOfRange { index: 5, len: 3 })
    );

    // capacity is larger than len, yet the spare positions are not addressable
    assert!(array.capacity() > 3);
    assert_eq!(
        array.read(3, |x| *x),
        Err(ContainerError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(to_vec(&array), vec![0, 1, 2]);
}

#[test]
fn remove_from_empty() {
    let mut array: ElasticArray<u8> = ElasticArray::new();
    assert_eq!(array.remove(0), Err(ContainerError::Empty));
    assert_eq!(array.pop(), Err(ContainerError::Empty));
}

#[test]
fn put_swap_read2() {
    let mut array = ElasticArray::of([String::from("a"), String::from("b")]);

    assert_eq!(array.put(0, String::from("z")), Ok(String::from("a")));
    array.swap(0, 1).unwrap();
    assert_eq!(
        array.read2(0, 1, |a, b| format!("{a}{b}")),
        Ok(String::from("bz"))
    );
}

#[test]
fn push_pop_as_stack() {
    let mut array = ElasticArray::using(Doubling);
    array.push(1).unwrap();
    array.push(2).unwrap();
    array.push(3).unwrap();

    assert_eq!(array.pop(), Ok(3));
    assert_eq!(array.pop(), Ok(2));
    assert_eq!(array.pop(), Ok(1));
    assert!(array.is_empty());
}

#[test]
fn search() {
    let array = ElasticArray::of([4, 8, 15, 16, 23, 42, 8]);
    assert_eq!(array.find(&8), Some(1));
    assert_eq!(array.find(&7), None);
    assert!(array.contains(&42));
    assert!(!array.contains(&43));
}

#[test]
fn require_bound() {
    let mut array: ElasticArray<u32, _> = ElasticArray::using(Doubling);

    array.require_bound(5);
    assert_eq!(array.capacity(), DEFAULT_BOUND);

    array.require_bound(11);
    assert_eq!(array.capacity(), 20);

    array.require_bound(100);
    assert_eq!(array.capacity(), 100);

    let mut bounded: ElasticArray<u32, _> = ElasticArray::using(NoGrowth);
    bounded.require_bound(100);
    assert_eq!(bounded.capacity(), DEFAULT_BOUND);
}

#[test]
fn size_never_exceeds_capacity_and_capacity_never_shrinks() {
    let mut array = ElasticArray::with_bound_using(2, Golden);
    let mut capacity = array.capacity();

    for round in 0..50usize {
        match round % 3 {
            2 => _ = array.remove(round % (array.len() + 1)),
            _ => array.insert(round % (array.len() + 1), round).unwrap(),
        }

        assert!(array.len() <= array.capacity());
        assert!(array.capacity() >= capacity);
        capacity = array.capacity();
    }
}

#[test]
fn closure_strategy() {
    let tenfold = |current: usize, required: usize| (current * 10).max(required);
    let mut array = ElasticArray::with_bound_using(1, tenfold);
    array.append(0).unwrap();
    array.append(1).unwrap();
    assert_eq!(array.capacity(), 10);
}

#[test]
fn try_from_optional() {
    let array = ElasticArray::try_from_optional([Some(1), Some(2)]).unwrap();
    assert_eq!(to_vec(&array), vec![1, 2]);

    let result = ElasticArray::try_from_optional([Some(1), Some(2), None]);
    assert_eq!(
        result.err(),
        Some(ContainerError::AbsentElement { position: 2 })
    );
}

#[test]
fn no_growth_scenario_with_zero_sized_elements() {
    let mut array = ElasticArray::using(NoGrowth);
    assert_eq!(array.capacity(), DEFAULT_BOUND);

    for _ in 0..10 {
        array.append(()).unwrap();
    }

    assert!(array.is_full());
    assert_eq!(array.capacity(), 10);
    assert_eq!(array.append(()), Err(ContainerError::Full { capacity: 10 }));
    assert_eq!(array.len(), 10);
}

#[test]
fn zero_sized_elements_grow_by_strategy() {
    let mut array = ElasticArray::with_bound_using(2, Doubling);
    for _ in 0..5 {
        array.push(()).unwrap();
    }
    assert_eq!(array.capacity(), 8);
    assert!(!array.is_full());
}
