//! End-to-end checks of the documented behaviour.

use algoviz::prelude::*;
use algoviz::step::SearchOutcome;

fn run(algorithm: Algorithm, values: &[i64], target: Option<i64>) -> Vec<Step> {
    algorithm
        .steps(&elements_from_values(values), target)
        .expect("generation succeeds")
}

#[test]
fn bubble_sort_of_five_elements() {
    let steps = run(Algorithm::Bubble, &[5, 3, 8, 1, 9], None);
    assert_eq!(steps[0].values(), vec![5, 3, 8, 1, 9]);

    let last = steps.last().expect("steps");
    assert_eq!(last.values(), vec![1, 3, 5, 8, 9]);
    assert_eq!(last.sorted, vec![0, 1, 2, 3, 4]);
}

#[test]
fn binary_search_found_and_not_found() {
    let values = [8, 24, 42, 55, 67, 89];

    let found = run(Algorithm::BinarySearch, &values, Some(55));
    let result = found.last().and_then(Step::search).expect("search detail");
    assert_eq!(result.found_index, Some(3));
    assert_eq!(result.outcome, SearchOutcome::Found);

    let missing = run(Algorithm::BinarySearch, &values, Some(56));
    let last = missing.last().expect("steps");
    assert_eq!(last.search().map(|s| s.outcome), Some(SearchOutcome::NotFound));
    let json: serde_json::Value = serde_json::to_value(last).expect("serialize");
    assert_eq!(json["detail"]["foundIndex"], serde_json::json!(-1));
}

#[test]
fn empty_and_single_inputs() {
    for algorithm in Algorithm::SORTS {
        assert!(run(algorithm, &[], None).is_empty(), "{algorithm}");

        let single = run(algorithm, &[42], None);
        assert_eq!(single.len(), 1, "{algorithm}");
        assert!(single[0].is_fully_sorted());
    }
    let search = run(Algorithm::LinearSearch, &[42], Some(42));
    assert_eq!(
        search.last().and_then(Step::search).and_then(|s| s.found_index),
        Some(0)
    );
}

#[test]
fn step_json_uses_camel_case() {
    let steps = run(Algorithm::Insertion, &[3, 1, 2], None);
    let json = serde_json::to_string(&steps).expect("serialize");
    assert!(json.contains("\"keyIndex\""));
    assert!(!json.contains("key_index"));

    let back: Vec<Step> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, steps);
}

#[test]
fn input_layer_rejects_what_generators_never_see() {
    let limits = InputLimits::for_algorithm(Algorithm::Bubble);
    let values = parse_values("5, 3, 8, 1, 9,").expect("parse");
    assert_eq!(values, vec![5, 3, 8, 1, 9]);
    assert!(validate_for(Algorithm::Bubble, &values, &limits).is_ok());

    assert!(parse_values("5, three").is_err());
    assert!(validate_for(Algorithm::Bubble, &[5, 300], &limits).is_err());
    assert!(validate_for(Algorithm::Bubble, &[1; 16], &limits).is_err());
    assert!(validate_for(
        Algorithm::BinarySearch,
        &[3, 1],
        &InputLimits::for_algorithm(Algorithm::BinarySearch)
    )
    .is_err());
}
