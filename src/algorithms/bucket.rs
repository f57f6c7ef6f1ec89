//! Bucket sort.
//!
//! The value range `min..=max` is split into `ceil(sqrt(n))` equal-width
//! buckets. Elements are distributed in input order, each bucket is sorted
//! with the insertion pass from [`super::insertion`], and the buckets are
//! gathered back in order.
//!
//! While elements sit in buckets the `array` field keeps the last full
//! arrangement; during gathering it is rewritten as
//! `gathered ++ still_in_buckets`, so every snapshot remains a permutation.

use super::insertion::{insertion_pass, InsertionEvent};
use super::{finished, trivial_steps};
use crate::step::{ArrayElement, Bucket, BucketDetail, BucketStage, Step, StepDetail, StepRecorder};

/// Number of buckets for `n` elements: the smallest `k` with `k * k >= n`.
#[must_use]
pub fn bucket_count(n: usize) -> usize {
    let mut k = 1;
    while k * k < n {
        k += 1;
    }
    k
}

/// Width of the value range `min..=max`.
///
/// Widened to `i128` since the full `i64` range does not fit in an `i64`.
fn value_span(min: i64, max: i64) -> i128 {
    i128::from(max) - i128::from(min) + 1
}

/// Bucket for `value` given the range start and width.
fn bucket_index(value: i64, min: i64, span: i128, count: usize) -> usize {
    let count_wide = i128::try_from(count).unwrap_or(i128::MAX);
    let scaled = (i128::from(value) - i128::from(min)) * count_wide / span;
    usize::try_from(scaled).unwrap_or(0).min(count - 1)
}

fn bucket_labels(min: i64, span: i128, count: usize) -> Vec<String> {
    let min = i128::from(min);
    let count = i128::try_from(count).unwrap_or(i128::MAX);
    let lower = |k: i128| min + (k * span + count - 1) / count;
    (0..count)
        .map(|k| {
            let (lo, hi) = (lower(k), lower(k + 1) - 1);
            match lo.cmp(&hi) {
                std::cmp::Ordering::Less => format!("{lo}-{hi}"),
                std::cmp::Ordering::Equal => lo.to_string(),
                std::cmp::Ordering::Greater => "empty".to_string(),
            }
        })
        .collect()
}

fn detail(stage: BucketStage, buckets: &[Bucket], active: Option<usize>, comparing: Vec<usize>) -> StepDetail {
    StepDetail::Buckets(BucketDetail {
        stage,
        buckets: buckets.to_vec(),
        active_bucket: active,
        bucket_comparing: comparing,
    })
}

/// Generate bucket sort steps for `input`.
#[must_use]
pub fn bucket_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    let min = array.iter().map(|e| e.value).min().unwrap_or(0);
    let max = array.iter().map(|e| e.value).max().unwrap_or(0);
    let span = value_span(min, max);
    let count = bucket_count(n);
    let mut buckets: Vec<Bucket> = bucket_labels(min, span, count)
        .into_iter()
        .map(Bucket::new)
        .collect();

    recorder.push(
        Step::snapshot(
            &array,
            format!("Minimum is {min}, maximum is {max}: creating {count} buckets"),
        )
        .detail(detail(BucketStage::Scan, &buckets, None, Vec::new())),
    );

    // Distribute
    for index in 0..n {
        let element = array[index].clone();
        let k = bucket_index(element.value, min, span, count);
        buckets[k].elements.push(element);
        recorder.push(
            Step::snapshot(
                &array,
                format!(
                    "Placing {} into bucket {k} ({})",
                    array[index].value, buckets[k].label
                ),
            )
            .pointing([index])
            .detail(detail(BucketStage::Distribute, &buckets, Some(k), Vec::new())),
        );
    }

    // Sort each bucket
    for k in 0..count {
        if buckets[k].elements.len() < 2 {
            continue;
        }
        recorder.push(
            Step::snapshot(&array, format!("Sorting bucket {k} with insertion sort"))
                .detail(detail(BucketStage::SortBuckets, &buckets, Some(k), Vec::new())),
        );

        let mut items = std::mem::take(&mut buckets[k].elements);
        insertion_pass(&mut items, |items, event| {
            let mut view = buckets.clone();
            view[k].elements = items.to_vec();
            let (text, comparing) = match event {
                InsertionEvent::Key { index } => (
                    format!("Bucket {k}: selecting {} as the key", items[index].value),
                    vec![index],
                ),
                InsertionEvent::Compare { left, right } => (
                    format!(
                        "Bucket {k}: comparing {} with {}",
                        items[right].value, items[left].value
                    ),
                    vec![left, right],
                ),
                InsertionEvent::Swap { left, right } => (
                    format!("Bucket {k}: shifting {} right", items[right].value),
                    vec![left, right],
                ),
                InsertionEvent::Placed { index, .. } => (
                    format!("Bucket {k}: inserted {}", items[index].value),
                    vec![index],
                ),
            };
            recorder.push(
                Step::snapshot(&array, text)
                    .detail(detail(BucketStage::SortBuckets, &view, Some(k), comparing)),
            );
        });
        buckets[k].elements = items;
    }

    // Gather
    recorder.push(
        Step::snapshot(&array, "Gathering the buckets back into the array in order")
            .detail(detail(BucketStage::Gather, &buckets, None, Vec::new())),
    );
    let mut gathered: Vec<ArrayElement> = Vec::with_capacity(n);
    for k in 0..count {
        let items = std::mem::take(&mut buckets[k].elements);
        for (taken, element) in items.iter().enumerate() {
            buckets[k].elements = items[taken + 1..].to_vec();
            gathered.push(element.clone());
            array = gathered
                .iter()
                .cloned()
                .chain(buckets.iter().flat_map(|b| b.elements.iter().cloned()))
                .collect();
            let position = gathered.len() - 1;
            recorder.push(
                Step::snapshot(
                    &array,
                    format!(
                        "Moving {} from bucket {k} to position {position}",
                        element.value
                    ),
                )
                .pointing([position])
                .sorted(0..gathered.len())
                .detail(detail(BucketStage::Gather, &buckets, Some(k), Vec::new())),
            );
        }
    }

    recorder.push(finished(&array));
    recorder.into_steps()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{elements, every_step_is_permutation, is_stable};
    use super::*;

    fn bucket_detail(step: &Step) -> Option<&BucketDetail> {
        match &step.detail {
            StepDetail::Buckets(detail) => Some(detail),
            _ => None,
        }
    }

    #[test]
    fn test_bucket_count() {
        assert_eq!(bucket_count(1), 1);
        assert_eq!(bucket_count(4), 2);
        assert_eq!(bucket_count(5), 3);
        assert_eq!(bucket_count(20), 5);
    }

    #[test]
    fn test_bucket_index_bounds() {
        assert_eq!(bucket_index(1, 1, 100, 5), 0);
        assert_eq!(bucket_index(100, 1, 100, 5), 4);
        assert_eq!(bucket_index(50, 1, 100, 5), 2);
        assert_eq!(bucket_index(7, 7, 1, 3), 0);
    }

    #[test]
    fn test_labels_cover_range() {
        let labels = bucket_labels(1, 100, 5);
        assert_eq!(labels, vec!["1-20", "21-40", "41-60", "61-80", "81-100"]);
    }

    #[test]
    fn test_full_i64_range() {
        let span = value_span(i64::MIN, i64::MAX);
        assert_eq!(span, 1_i128 << 64);
        assert_eq!(bucket_index(i64::MIN, i64::MIN, span, 2), 0);
        assert_eq!(bucket_index(i64::MAX, i64::MIN, span, 2), 1);
        assert_eq!(
            bucket_labels(i64::MIN, span, 2),
            vec![format!("{}--1", i64::MIN), format!("0-{}", i64::MAX)]
        );
    }

    #[test]
    fn test_sorts_extreme_values() {
        for values in [
            vec![i64::MAX, i64::MIN],
            vec![2_000_000_000_000_000_000, -2_000_000_000_000_000_000, 0, 5, 7],
            vec![i64::MAX, 0, i64::MIN, i64::MAX, -1, i64::MIN + 1],
        ] {
            let input = elements(&values);
            let steps = bucket_sort_steps(&input);
            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(steps.last().expect("steps").values(), expected);
            assert!(every_step_is_permutation(&input, &steps));
        }
    }

    #[test]
    fn test_sorts() {
        let input = elements(&[29, 25, 3, 49, 9, 37, 21, 43]);
        let steps = bucket_sort_steps(&input);
        assert_eq!(steps[0].array, input);
        assert_eq!(
            steps.last().expect("steps").values(),
            vec![3, 9, 21, 25, 29, 37, 43, 49]
        );
        assert!(every_step_is_permutation(&input, &steps));
        assert!(is_stable(&input, &steps.last().expect("steps").array));
    }

    #[test]
    fn test_distribution_holds_every_element() {
        let input = elements(&[5, 1, 9, 3]);
        let steps = bucket_sort_steps(&input);
        let last_distribute = steps
            .iter()
            .filter(|s| bucket_detail(s).is_some_and(|d| d.stage == BucketStage::Distribute))
            .last()
            .and_then(bucket_detail)
            .expect("distribution step");
        let held: usize = last_distribute.buckets.iter().map(|b| b.elements.len()).sum();
        assert_eq!(held, 4);
    }

    #[test]
    fn test_buckets_sorted_before_gather() {
        let steps = bucket_sort_steps(&elements(&[19, 12, 15, 11, 30, 22]));
        let gather_start = steps
            .iter()
            .find(|s| s.message.text.starts_with("Gathering"))
            .and_then(bucket_detail)
            .expect("gather step");
        for bucket in &gather_start.buckets {
            let values: Vec<i64> = bucket.elements.iter().map(|e| e.value).collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(values, expected, "bucket {}", bucket.label);
        }
    }

    #[test]
    fn test_all_equal_values() {
        let steps = bucket_sort_steps(&elements(&[4, 4, 4]));
        assert_eq!(steps.last().expect("steps").values(), vec![4, 4, 4]);
    }
}
