//! Property tests over every generator.
//!
//! Each test states the null hypothesis it tries to falsify.

use algoviz::audit::digest;
use algoviz::prelude::*;
use algoviz::step::SearchOutcome;
use proptest::prelude::*;

fn ids(elements: &[ArrayElement]) -> Vec<&str> {
    let mut ids: Vec<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

fn sort_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::SORTS.to_vec())
}

/// Any `i64`, with the range ends drawn often.
fn wide_value() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(i64::MIN),
        Just(i64::MAX),
        Just(i64::MIN + 1),
        Just(i64::MAX - 1),
        Just(0i64),
        any::<i64>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // H0: some sort leaves its final array out of order
    #[test]
    fn h0_1_final_step_is_sorted(
        algorithm in sort_strategy(),
        values in prop::collection::vec(-50i64..150, 2..20),
    ) {
        let input = elements_from_values(&values);
        let steps = algorithm.steps(&input, None)?;
        let last = steps.last().ok_or_else(|| TestCaseError::fail("no steps"))?;

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(last.values(), expected);
        prop_assert!(last.is_fully_sorted());
    }

    // H0: some step loses, duplicates or invents an element
    #[test]
    fn h0_2_every_step_is_permutation(
        algorithm in sort_strategy(),
        values in prop::collection::vec(1i64..100, 0..20),
    ) {
        let input = elements_from_values(&values);
        let expected = ids(&input);
        for step in algorithm.steps(&input, None)? {
            prop_assert_eq!(step.array.len(), input.len());
            prop_assert_eq!(ids(&step.array), expected.clone());
        }
    }

    // H0: the first step does not show the untouched input
    #[test]
    fn h0_3_first_step_is_input(
        algorithm in sort_strategy(),
        values in prop::collection::vec(1i64..100, 1..20),
    ) {
        let input = elements_from_values(&values);
        let steps = algorithm.steps(&input, None)?;
        prop_assert_eq!(&steps[0].array, &input);
    }

    // H0: a stable sort reorders equal values
    #[test]
    fn h0_4_stable_sorts_keep_equal_order(
        values in prop::collection::vec(1i64..6, 2..16),
    ) {
        let input = elements_from_values(&values);
        let position = |id: &str| input.iter().position(|e| e.id == id);
        for algorithm in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge, Algorithm::Bucket, Algorithm::Radix] {
            let steps = algorithm.steps(&input, None)?;
            let last = steps.last().ok_or_else(|| TestCaseError::fail("no steps"))?;
            for pair in last.array.windows(2) {
                if pair[0].value == pair[1].value {
                    prop_assert!(
                        position(&pair[0].id) < position(&pair[1].id),
                        "{} reordered equal values", algorithm
                    );
                }
            }
        }
    }

    // H0: the same input yields different sequences
    #[test]
    fn h0_5_generation_is_deterministic(
        algorithm in sort_strategy(),
        values in prop::collection::vec(1i64..100, 0..20),
    ) {
        let input = elements_from_values(&values);
        let a = digest(&algorithm.steps(&input, None)?)?;
        let b = digest(&algorithm.steps(&input, None)?)?;
        prop_assert_eq!(a, b);
    }

    // H0: the audit rejects a generated sequence
    #[test]
    fn h0_6_generated_sequences_pass_audit(
        algorithm in sort_strategy(),
        values in prop::collection::vec(1i64..100, 0..20),
    ) {
        let input = elements_from_values(&values);
        let steps = algorithm.steps(&input, None)?;
        let report = audit_steps(algorithm, &input, &steps)?;
        prop_assert!(report.all_passed(), "{:?}", report.failures().collect::<Vec<_>>());
    }

    // H0: linear search disagrees with a left-to-right scan
    #[test]
    fn h0_7_linear_search_finds_first_match(
        values in prop::collection::vec(1i64..20, 1..20),
        target in 1i64..20,
    ) {
        let input = elements_from_values(&values);
        let steps = Algorithm::LinearSearch.steps(&input, Some(target))?;
        let result = steps
            .last()
            .and_then(Step::search)
            .ok_or_else(|| TestCaseError::fail("no search result"))?;
        prop_assert_eq!(result.found_index, values.iter().position(|&v| v == target));
    }

    // H0: binary search misses a present target or reports an absent one
    #[test]
    fn h0_8_binary_search_agrees_with_contains(
        mut values in prop::collection::vec(1i64..100, 1..20),
        target in 1i64..100,
    ) {
        values.sort_unstable();
        let input = elements_from_values(&values);
        let steps = Algorithm::BinarySearch.steps(&input, Some(target))?;
        let result = steps
            .last()
            .and_then(Step::search)
            .ok_or_else(|| TestCaseError::fail("no search result"))?;

        match result.found_index {
            Some(index) => {
                prop_assert_eq!(result.outcome, SearchOutcome::Found);
                prop_assert_eq!(values[index], target);
            }
            None => {
                prop_assert_eq!(result.outcome, SearchOutcome::NotFound);
                prop_assert!(!values.contains(&target));
            }
        }
    }

    // H0: some sort overflows or misorders values near the ends of i64
    #[test]
    fn h0_9_sorts_handle_full_i64_range(
        algorithm in sort_strategy(),
        values in prop::collection::vec(wide_value(), 2..20),
    ) {
        let input = elements_from_values(&values);
        let steps = algorithm.steps(&input, None)?;
        let last = steps.last().ok_or_else(|| TestCaseError::fail("no steps"))?;

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(last.values(), expected);
        let expected_ids = ids(&input);
        for step in &steps {
            prop_assert_eq!(ids(&step.array), expected_ids.clone());
        }
        prop_assert!(audit_steps(algorithm, &input, &steps)?.all_passed());
    }
}
