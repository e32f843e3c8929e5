use pretty_assertions::assert_eq;
use rstest::rstest;
use sortbench::benchmark::{build_array, drain_array};
use sortbench::random::{RandomSource, ScriptedRandom, SeededRandom};
use sortbench::store::array::SortedArray;
use sortbench::store::to_value;
use sortbench::Error;

use crate::common::assert_non_decreasing;

#[test]
fn test_build_and_drain_scripted_size_four() {
    let mut array = SortedArray::with_capacity(4);
    let mut random = ScriptedRandom::new([2, 0, 3, 1]);

    build_array(&mut array, &mut random).unwrap();
    assert_eq!(array.as_slice(), &[0, 1, 2, 3]);

    let mut lengths = vec![array.len()];
    for position in [3, 0, 1, 0] {
        array.remove(position).unwrap();
        lengths.push(array.len());
    }

    assert_eq!(lengths, vec![4, 3, 2, 1, 0]);
    assert!(array.is_empty());
}

#[rstest]
#[case::one(1, 0)]
#[case::ten(10, 1)]
#[case::hundred(100, 2)]
#[case::thousand(1000, 3)]
fn test_invariants_hold_during_build_and_drain(#[case] size: usize, #[case] seed: u64) {
    let mut array = SortedArray::with_capacity(size);
    let mut random = SeededRandom::from_seed(seed);

    for i in 1..=size {
        array.insert(to_value(random.next_below(size))).unwrap();
        assert_eq!(array.len(), i);
        assert_non_decreasing(array.as_slice());
    }

    let before = array.as_slice().to_vec();
    assert_eq!(before.len(), size);

    for remaining in (0..size).rev() {
        let position = random.next_below(array.len());
        array.remove(position).unwrap();
        assert_eq!(array.len(), remaining);
        assert_non_decreasing(array.as_slice());
    }
    assert!(array.is_empty());
}

#[test]
fn test_build_stops_at_capacity() {
    let mut array = SortedArray::with_capacity(3);
    let mut random = SeededRandom::from_seed(11);

    assert_eq!(build_array(&mut array, &mut random), Ok(3));
    assert_eq!(build_array(&mut array, &mut random), Ok(0));
    assert_eq!(array.len(), 3);
    assert_eq!(array.insert(0), Err(Error::CapacityExceeded { capacity: 3 }));
}

#[test]
fn test_size_one_single_deletion() {
    let mut array = SortedArray::with_capacity(1);
    let mut random = SeededRandom::from_seed(5);

    build_array(&mut array, &mut random).unwrap();
    assert_eq!(array.as_slice(), &[0]);

    assert_eq!(drain_array(&mut array, &mut random), Ok(1));
    assert!(array.is_empty());
    assert_eq!(
        array.remove(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_build_then_drain_twice_leaves_nothing() {
    let mut random = SeededRandom::from_seed(99);

    for _ in 0..2 {
        let mut array = SortedArray::with_capacity(64);
        assert_eq!(build_array(&mut array, &mut random), Ok(64));
        assert_eq!(drain_array(&mut array, &mut random), Ok(64));
        assert!(array.is_empty());
        assert_eq!(array.to_string(), "[]");
    }
}
