//! LSD radix sort, base 10.
//!
//! One pass per digit of the largest key, least significant first. Each pass
//! distributes the elements into digit buckets `0..=9` in array order and
//! collects them back bucket by bucket, which keeps every pass stable.
//!
//! Keys are the values themselves; if any value is negative all keys are
//! shifted by the minimum so digits stay non-negative.

use super::{finished, trivial_steps};
use crate::step::{format_values, ArrayElement, Bucket, RadixDetail, RadixStage, Step, StepDetail, StepRecorder};

const BASE: u64 = 10;

/// Human name of a decimal place.
#[must_use]
pub fn place_name(place: u64) -> String {
    match place {
        1 => "ones".to_string(),
        10 => "tens".to_string(),
        100 => "hundreds".to_string(),
        1_000 => "thousands".to_string(),
        other => format!("{other}s"),
    }
}

/// Number of decimal digits in `key` (at least one).
#[must_use]
pub fn digit_count(mut key: u64) -> usize {
    let mut digits = 1;
    while key >= BASE {
        key /= BASE;
        digits += 1;
    }
    digits
}

fn empty_buckets() -> Vec<Bucket> {
    (0..BASE).map(|d| Bucket::new(d.to_string())).collect()
}

fn detail(place: u64, pass: usize, stage: RadixStage, buckets: &[Bucket], active: Option<usize>) -> StepDetail {
    StepDetail::Radix(RadixDetail {
        place,
        pass,
        stage,
        buckets: buckets.to_vec(),
        active_bucket: active,
    })
}

/// Generate radix sort steps for `input`.
#[must_use]
pub fn radix_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    let offset = array.iter().map(|e| e.value).min().unwrap_or(0).min(0);
    let key = |value: i64| u64::try_from(i128::from(value) - i128::from(offset)).unwrap_or(u64::MAX);
    let max_key = array.iter().map(|e| key(e.value)).max().unwrap_or(0);
    let passes = digit_count(max_key);

    let shifted = if offset < 0 {
        format!(" (keys shifted by {})", offset.unsigned_abs())
    } else {
        String::new()
    };
    recorder.push(Step::snapshot(
        &array,
        format!(
            "The largest key has {passes} digit{}, so {passes} pass{} needed{shifted}",
            if passes == 1 { "" } else { "s" },
            if passes == 1 { " is" } else { "es are" },
        ),
    ));

    let mut place: u64 = 1;
    for pass in 0..passes {
        let name = place_name(place);
        let mut buckets = empty_buckets();

        for index in 0..n {
            let digit = (key(array[index].value) / place) % BASE;
            let d = usize::try_from(digit).unwrap_or(0);
            buckets[d].elements.push(array[index].clone());
            recorder.push(
                Step::snapshot(
                    &array,
                    format!(
                        "{} has {digit} in the {name} place: bucket {digit}",
                        array[index].value
                    ),
                )
                .pointing([index])
                .detail(detail(place, pass, RadixStage::Distribute, &buckets, Some(d))),
            );
        }

        let mut collected: Vec<ArrayElement> = Vec::with_capacity(n);
        for d in 0..buckets.len() {
            let items = std::mem::take(&mut buckets[d].elements);
            for (taken, element) in items.iter().enumerate() {
                buckets[d].elements = items[taken + 1..].to_vec();
                collected.push(element.clone());
                array = collected
                    .iter()
                    .cloned()
                    .chain(buckets.iter().flat_map(|b| b.elements.iter().cloned()))
                    .collect();
                let position = collected.len() - 1;
                recorder.push(
                    Step::snapshot(
                        &array,
                        format!(
                            "Collecting {} from bucket {d} into position {position}",
                            element.value
                        ),
                    )
                    .pointing([position])
                    .detail(detail(place, pass, RadixStage::Collect, &buckets, Some(d))),
                );
            }
        }

        recorder.push(
            Step::snapshot(
                &array,
                format!("After sorting by the {name} digit: {}", format_values(&array)),
            )
            .detail(detail(place, pass, RadixStage::Collect, &buckets, None)),
        );

        match place.checked_mul(BASE) {
            Some(next) => place = next,
            None => break,
        }
    }

    recorder.push(finished(&array));
    recorder.into_steps()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{elements, every_step_is_permutation, is_stable};
    use super::*;

    fn radix_detail(step: &Step) -> Option<&RadixDetail> {
        match &step.detail {
            StepDetail::Radix(detail) => Some(detail),
            _ => None,
        }
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
    }

    #[test]
    fn test_place_names() {
        assert_eq!(place_name(1), "ones");
        assert_eq!(place_name(100), "hundreds");
        assert_eq!(place_name(10_000), "10000s");
    }

    #[test]
    fn test_sorts() {
        let input = elements(&[170, 45, 75, 90, 802, 24, 66]);
        let steps = radix_sort_steps(&input);
        assert_eq!(steps[0].array, input);
        assert_eq!(
            steps.last().expect("steps").values(),
            vec![24, 45, 66, 75, 90, 170, 802]
        );
        assert!(every_step_is_permutation(&input, &steps));
    }

    #[test]
    fn test_one_pass_per_digit() {
        let steps = radix_sort_steps(&elements(&[170, 45, 75, 90]));
        let places: Vec<u64> = steps
            .iter()
            .filter_map(radix_detail)
            .map(|d| d.place)
            .collect();
        assert!(places.contains(&1));
        assert!(places.contains(&10));
        assert!(places.contains(&100));
        assert!(!places.contains(&1000));
    }

    #[test]
    fn test_ones_pass_order() {
        let steps = radix_sort_steps(&elements(&[21, 13, 42, 11]));
        let after_ones = steps
            .iter()
            .find(|s| s.message.text.starts_with("After sorting by the ones"))
            .expect("ones pass");
        assert_eq!(after_ones.values(), vec![21, 11, 42, 13]);
    }

    #[test]
    fn test_stable_with_duplicates() {
        let input = elements(&[55, 12, 55, 12, 31]);
        let steps = radix_sort_steps(&input);
        assert!(is_stable(&input, &steps.last().expect("steps").array));
    }

    #[test]
    fn test_negative_values_are_shifted() {
        let input = elements(&[3, -20, 7, -1]);
        let steps = radix_sort_steps(&input);
        assert_eq!(steps.last().expect("steps").values(), vec![-20, -1, 3, 7]);
        assert!(steps[1].message.text.contains("shifted by 20"));
    }

    #[test]
    fn test_full_i64_range() {
        let input = elements(&[i64::MAX, 0, i64::MIN, -1, i64::MAX]);
        let steps = radix_sort_steps(&input);
        let last = steps.last().expect("steps");
        assert_eq!(last.values(), vec![i64::MIN, -1, 0, i64::MAX, i64::MAX]);
        assert!(is_stable(&input, &last.array));
        assert!(every_step_is_permutation(&input, &steps));
        assert!(steps[1].message.text.contains("20 passes"));
        assert!(steps[1].message.text.contains(&i64::MIN.unsigned_abs().to_string()));
    }
}
