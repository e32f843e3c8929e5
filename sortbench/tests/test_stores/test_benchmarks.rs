use pretty_assertions::assert_eq;
use rstest::rstest;
use sortbench::random::SeededRandom;
use sortbench::{benchmark_array, benchmark_linked_list, Error, StoreKind};

use crate::common::RecordingRandom;

fn expected_bounds(size: usize) -> Vec<usize> {
    std::iter::repeat(size)
        .take(size)
        .chain((1..=size).rev())
        .collect()
}

#[rstest]
#[case::one(1)]
#[case::four(4)]
#[case::hundred(100)]
fn test_array_draws_values_then_positions(#[case] size: usize) {
    let mut random = RecordingRandom::new(SeededRandom::from_seed(1));

    let measurement = benchmark_array(size, &mut random).unwrap();

    assert_eq!(measurement.store, StoreKind::Array);
    assert_eq!(measurement.insertions, size);
    assert_eq!(measurement.deletions, size);
    assert_eq!(random.bounds, expected_bounds(size));
}

#[rstest]
#[case::one(1)]
#[case::four(4)]
#[case::hundred(100)]
fn test_linked_list_draws_values_then_positions(#[case] size: usize) {
    let mut random = RecordingRandom::new(SeededRandom::from_seed(1));

    let measurement = benchmark_linked_list(size, &mut random).unwrap();

    assert_eq!(measurement.store, StoreKind::LinkedList);
    assert_eq!(measurement.insertions, size);
    assert_eq!(measurement.deletions, size);
    assert_eq!(random.bounds, expected_bounds(size));
}

#[test]
fn test_zero_size_is_rejected_without_drawing() {
    let mut random = RecordingRandom::new(SeededRandom::from_seed(1));

    assert_eq!(benchmark_array(0, &mut random), Err(Error::InvalidSize(0)));
    assert_eq!(
        benchmark_linked_list(0, &mut random),
        Err(Error::InvalidSize(0))
    );
    assert!(random.bounds.is_empty());
}

#[test]
fn test_measurement_serializes_to_json() {
    let mut random = SeededRandom::from_seed(1);
    let measurement = benchmark_array(16, &mut random).unwrap();

    let value = serde_json::to_value(measurement).unwrap();

    assert_eq!(value["store"], "array");
    assert_eq!(value["size"], 16);
    assert_eq!(value["insertions"], 16);
    assert_eq!(value["deletions"], 16);
    assert!(value["elapsed"]["secs"].is_u64());
}
